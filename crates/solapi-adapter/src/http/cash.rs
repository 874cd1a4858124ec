/*
[INPUT]:  Account credentials (via signed request)
[OUTPUT]: Account balance and points
[POS]:    HTTP layer - cash endpoints
[UPDATE]: When adding cash endpoints or changing balance fields
*/

use crate::http::{Result, SolapiClient};
use crate::types::Balance;

const NO_QUERY: &[(&str, &str)] = &[];

impl SolapiClient {
    /// Query account balance
    ///
    /// GET cash/v1/balance
    pub async fn get_balance(&self) -> Result<Balance> {
        self.get("cash/v1/balance", NO_QUERY).await
    }
}
