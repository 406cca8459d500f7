//! Read-only group and package listings.

use crate::error::Manage2Error;
use crate::query::QueryParams;
use crate::resource::Resource;
use crate::Manage2Client;

impl Manage2Client {
    /// List the account's license groups.
    ///
    /// Calls `GET {base_url}/XMLgroupInfo.cgi?output=json`.
    pub async fn list_groups(&self) -> Result<Vec<u8>, Manage2Error> {
        self.perform_request(Resource::GroupInfo, QueryParams::new()).await
    }

    /// List the packages the account may assign to licenses.
    ///
    /// Calls `GET {base_url}/XMLpackageInfo.cgi?output=json`.
    pub async fn list_packages(&self) -> Result<Vec<u8>, Manage2Error> {
        self.perform_request(Resource::PackageInfo, QueryParams::new()).await
    }
}
