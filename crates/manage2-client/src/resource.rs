//! Manage2 endpoint scripts.

use std::fmt;

/// Server-side script identifying one Manage2 operation.
///
/// Several operations share a script: license add, transfer and
/// transfer-cancel all go through [`Resource::TransferRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    LicenseInfo,
    TransferRequest,
    Transfer,
    GroupInfo,
    LicenseExpire,
    OneTimeExtension,
    SecVerify,
    PackageInfo,
    Lookup,
    RawLookup,
    LicenseReActivate,
}

impl Resource {
    /// Script path relative to the Manage2 base URL.
    pub fn path(self) -> &'static str {
        match self {
            Self::LicenseInfo => "XMLlicenseInfo.cgi",
            Self::TransferRequest => "XMLtransferRequest.cgi",
            Self::Transfer => "XMLtransfer.cgi",
            Self::GroupInfo => "XMLgroupInfo.cgi",
            Self::LicenseExpire => "XMLlicenseExpire.cgi",
            Self::OneTimeExtension => "XMLonetimeext.cgi",
            Self::SecVerify => "XMLsecverify.cgi",
            Self::PackageInfo => "XMLpackageInfo.cgi",
            Self::Lookup => "XMLlookup.cgi",
            Self::RawLookup => "XMLRawlookup.cgi",
            Self::LicenseReActivate => "XMLlicenseReActivate.cgi",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
