//! License operations.
//!
//! Upstream reference: `https://documentation.cpanel.net/display/SDK/Manage2+API+Functions`
//!
//! | Method | Script | Parameters |
//! |--------|--------|------------|
//! | [`list_licenses`](Manage2Client::list_licenses) | `XMLlicenseInfo.cgi` | `expired` |
//! | [`add_license`](Manage2Client::add_license) | `XMLtransferRequest.cgi` | `groupid`, `packageid`, `ip` |
//! | [`cancel_license_transfer`](Manage2Client::cancel_license_transfer) | `XMLtransferRequest.cgi` | `cancel`, `groupid`, `packageid`, `ip` |
//! | [`change_license`](Manage2Client::change_license) | `XMLtransfer.cgi` | `oldip`, `newip`, `packageid`, `force`, `dryrun` |
//! | [`expire_license`](Manage2Client::expire_license) | `XMLlicenseExpire.cgi` | `liscid`, `expcode` |
//! | [`extend_license`](Manage2Client::extend_license) | `XMLonetimeext.cgi` | `ip` |
//! | [`ip_to_licenseid`](Manage2Client::ip_to_licenseid) | `XMLlookup.cgi` | `ip`, `all` |
//! | [`get_license`](Manage2Client::get_license) | `XMLRawlookup.cgi` | `ip`, `all` |
//! | [`reactivate_expired_license`](Manage2Client::reactivate_expired_license) | `XMLlicenseReActivate.cgi` | `liscid`, `force`, `dryrun` |
//! | [`license_transfer`](Manage2Client::license_transfer) | `XMLtransferRequest.cgi` | `groupid`, `packageid`, `ip` |
//!
//! Arguments are sent as given. Flags are usually `bool` (sent as `1`/`0`)
//! but any [`QueryValue`] is accepted. Manage2 validates them and reports
//! problems in the response body.

use crate::error::Manage2Error;
use crate::query::{QueryParams, QueryValue};
use crate::resource::Resource;
use crate::Manage2Client;

/// Expiration reason sent when the caller supplies none.
pub const DEFAULT_EXPCODE: &str = "normal";

impl Manage2Client {
    /// List the account's licenses.
    ///
    /// `expired` defaults to `0` (active licenses only).
    ///
    /// Calls `GET {base_url}/XMLlicenseInfo.cgi?expired=..&output=json`.
    pub async fn list_licenses(
        &self,
        expired: Option<QueryValue>,
    ) -> Result<Vec<u8>, Manage2Error> {
        let expired = expired.unwrap_or_else(|| QueryValue::from(false));
        let params = QueryParams::new().with("expired", expired);
        self.perform_request(Resource::LicenseInfo, params).await
    }

    /// Add a license for `ip` in the given group and package.
    ///
    /// Calls `GET {base_url}/XMLtransferRequest.cgi`.
    pub async fn add_license(
        &self,
        groupid: impl Into<QueryValue>,
        packageid: impl Into<QueryValue>,
        ip: &str,
    ) -> Result<Vec<u8>, Manage2Error> {
        let params = QueryParams::new()
            .with("groupid", groupid)
            .with("packageid", packageid)
            .with("ip", ip);
        self.perform_request(Resource::TransferRequest, params).await
    }

    /// Cancel a pending license transfer.
    ///
    /// Calls `GET {base_url}/XMLtransferRequest.cgi` with the `cancel` flag.
    pub async fn cancel_license_transfer(
        &self,
        ip: &str,
        cancel: impl Into<QueryValue>,
        groupid: impl Into<QueryValue>,
        packageid: impl Into<QueryValue>,
    ) -> Result<Vec<u8>, Manage2Error> {
        let params = QueryParams::new()
            .with("cancel", cancel)
            .with("groupid", groupid)
            .with("packageid", packageid)
            .with("ip", ip);
        self.perform_request(Resource::TransferRequest, params).await
    }

    /// Move a license from `oldip` to `newip`.
    ///
    /// With `dryrun` set, Manage2 reports what would happen without applying
    /// the change.
    ///
    /// Calls `GET {base_url}/XMLtransfer.cgi`.
    pub async fn change_license(
        &self,
        oldip: &str,
        newip: &str,
        packageid: impl Into<QueryValue>,
        force: impl Into<QueryValue>,
        dryrun: impl Into<QueryValue>,
    ) -> Result<Vec<u8>, Manage2Error> {
        let params = QueryParams::new()
            .with("oldip", oldip)
            .with("newip", newip)
            .with("packageid", packageid)
            .with("force", force)
            .with("dryrun", dryrun);
        self.perform_request(Resource::Transfer, params).await
    }

    /// Expire a license.
    ///
    /// `expcode` defaults to [`DEFAULT_EXPCODE`].
    ///
    /// Calls `GET {base_url}/XMLlicenseExpire.cgi?liscid=..&expcode=..&output=json`.
    pub async fn expire_license(
        &self,
        licenseid: impl Into<QueryValue>,
        expcode: Option<&str>,
    ) -> Result<Vec<u8>, Manage2Error> {
        let params = QueryParams::new()
            .with("liscid", licenseid)
            .with("expcode", expcode.unwrap_or(DEFAULT_EXPCODE));
        self.perform_request(Resource::LicenseExpire, params).await
    }

    /// Extend a one-time license bound to `ip`.
    ///
    /// Calls `GET {base_url}/XMLonetimeext.cgi`.
    pub async fn extend_license(&self, ip: &str) -> Result<Vec<u8>, Manage2Error> {
        let params = QueryParams::new().with("ip", ip);
        self.perform_request(Resource::OneTimeExtension, params).await
    }

    /// Look up the license ID(s) bound to `ip`.
    ///
    /// `all_licenses` defaults to `1` (include every license, not only
    /// those owned by this account).
    ///
    /// Calls `GET {base_url}/XMLlookup.cgi?ip=..&all=..&output=json`.
    pub async fn ip_to_licenseid(
        &self,
        ip: &str,
        all_licenses: Option<QueryValue>,
    ) -> Result<Vec<u8>, Manage2Error> {
        let params = QueryParams::new()
            .with("ip", ip)
            .with("all", all_licenses.unwrap_or_else(|| QueryValue::from(true)));
        self.perform_request(Resource::Lookup, params).await
    }

    /// Fetch raw license information for `ip`.
    ///
    /// `all_licenses` defaults to `1`.
    ///
    /// Calls `GET {base_url}/XMLRawlookup.cgi?ip=..&all=..&output=json`.
    pub async fn get_license(
        &self,
        ip: &str,
        all_licenses: Option<QueryValue>,
    ) -> Result<Vec<u8>, Manage2Error> {
        let params = QueryParams::new()
            .with("ip", ip)
            .with("all", all_licenses.unwrap_or_else(|| QueryValue::from(true)));
        self.perform_request(Resource::RawLookup, params).await
    }

    /// Reactivate an expired license.
    ///
    /// Calls `GET {base_url}/XMLlicenseReActivate.cgi`.
    pub async fn reactivate_expired_license(
        &self,
        licenseid: impl Into<QueryValue>,
        force: impl Into<QueryValue>,
        dryrun: impl Into<QueryValue>,
    ) -> Result<Vec<u8>, Manage2Error> {
        let params = QueryParams::new()
            .with("liscid", licenseid)
            .with("force", force)
            .with("dryrun", dryrun);
        self.perform_request(Resource::LicenseReActivate, params).await
    }

    /// Request a license transfer to this account.
    ///
    /// Same wire request as [`add_license`](Self::add_license); Manage2
    /// treats an IP that already holds a license elsewhere as a transfer.
    ///
    /// Calls `GET {base_url}/XMLtransferRequest.cgi`.
    pub async fn license_transfer(
        &self,
        groupid: impl Into<QueryValue>,
        packageid: impl Into<QueryValue>,
        ip: &str,
    ) -> Result<Vec<u8>, Manage2Error> {
        let params = QueryParams::new()
            .with("groupid", groupid)
            .with("packageid", packageid)
            .with("ip", ip);
        self.perform_request(Resource::TransferRequest, params).await
    }
}
