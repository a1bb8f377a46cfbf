use serde::Serialize;
use std::fmt;

/// NXDOMAIN, the only response code the resolver treats as "no such record".
pub const RCODE_NXDOMAIN: u16 = 3;

/// IANA name for a DNS response code, or `""` when the code is unassigned.
pub fn rcode_name(rcode: u16) -> &'static str {
    match rcode {
        0 => "Success",
        1 => "FormErr",
        2 => "ServFail",
        3 => "NXDomain",
        4 => "NotImp",
        5 => "Refused",
        6 => "YXDomain",
        7 => "YXRRSet",
        8 => "NXRRSet",
        9 => "NotAuth",
        10 => "NotZone",
        11 => "DSOTYPENI",
        16 => "BADVERS_BADSIG",
        17 => "BADKEY",
        18 => "BADTIME",
        19 => "BADMODE",
        20 => "BADNAME",
        21 => "BADALG",
        22 => "BADTRUNC",
        23 => "BADCOOKIE",
        _ => "",
    }
}

/// Human readable description of a DNS response code.
pub fn rcode_detail(rcode: u16) -> &'static str {
    match rcode {
        1 => "The name server was unable to interpret the query.",
        2 => "The name server was unable to process this query due to a problem with the name server.",
        3 => "Non-Existent Domain.",
        4 => "The name server does not support the requested kind of query.",
        5 => "The name server refuses to perform the specified operation for policy reasons.",
        6 => "Name Exists when it should not.",
        7 => "RR Set Exists when it should not.",
        8 => "RR Set that should exist does not.",
        9 => "Server Not Authoritative for zone  / Not Authorized.",
        10 => "Name not contained in zone.",
        11 => "DSO-TYPE Not Implemented.",
        16 => "Bad OPT Version. / TSIG Signature Failure.",
        17 => "Key not recognized.",
        18 => "Signature out of time window",
        19 => "Bad TKEY Mode.",
        20 => "Duplicate key name.",
        21 => "Algorithm not supported.",
        22 => "Bad Truncation.",
        23 => "Bad/missing Server Cookie.",
        _ => "Undefined Error.",
    }
}

/// A non-zero response code returned by a DNS server for `domain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RCodeError {
    pub rcode: u16,
    pub code: String,
    #[serde(rename = "error")]
    pub name: String,
    pub domain: String,
}

impl RCodeError {
    pub fn new(rcode: u16, domain: impl Into<String>) -> Self {
        Self {
            rcode,
            code: format!("RCODE_{}", rcode),
            name: rcode_name(rcode).to_string(),
            domain: domain.into(),
        }
    }

    pub fn nxdomain(domain: impl Into<String>) -> Self {
        Self::new(RCODE_NXDOMAIN, domain)
    }

    pub fn detail(&self) -> &'static str {
        rcode_detail(self.rcode)
    }

    pub fn is_nxdomain(&self) -> bool {
        self.rcode == RCODE_NXDOMAIN
    }
}

impl fmt::Display for RCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(
                f,
                "{} (rcode={}, domain={})",
                self.detail(),
                self.rcode,
                self.domain
            )
        } else {
            write!(
                f,
                "{} (rcode={}, error={}, domain={})",
                self.detail(),
                self.rcode,
                self.name,
                self.domain
            )
        }
    }
}

impl std::error::Error for RCodeError {}
