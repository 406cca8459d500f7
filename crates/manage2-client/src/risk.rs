//! Fraud-risk lookup.

use crate::error::Manage2Error;
use crate::query::QueryParams;
use crate::resource::Resource;
use crate::Manage2Client;

impl Manage2Client {
    /// Fetch the fraud-risk score Manage2 holds for `ip`.
    ///
    /// Calls `GET {base_url}/XMLsecverify.cgi?ip=..&output=json`.
    pub async fn fetch_risk_data(&self, ip: &str) -> Result<Vec<u8>, Manage2Error> {
        let params = QueryParams::new().with("ip", ip);
        self.perform_request(Resource::SecVerify, params).await
    }
}
