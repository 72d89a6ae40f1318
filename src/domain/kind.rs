//! Catalog kinds
//!
//! Every catalog shares the same record shape and storage contract. A kind only
//! decides the table it lives in and how it is named in routes, logs and errors.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CatalogKind {
    /// Table name, also used as the route segment (`/api/acmes`)
    pub table: &'static str,
    /// Lower-case singular, used in error messages ("acme not found: x")
    pub singular: &'static str,
    /// Capitalized singular, used for operation names in logs ("GetAcmeById")
    pub display: &'static str,
}

impl CatalogKind {
    pub const ACME: CatalogKind = CatalogKind {
        table: "acmes",
        singular: "acme",
        display: "Acme",
    };

    pub const GOLDEN: CatalogKind = CatalogKind {
        table: "goldens",
        singular: "golden",
        display: "Golden",
    };

    /// Every kind served by the process
    pub const ALL: [CatalogKind; 2] = [CatalogKind::ACME, CatalogKind::GOLDEN];

    /// Operation name as it appears in logs, e.g. `op_name("Get", "ById")`
    /// gives `GetAcmeById`.
    pub fn op_name(&self, verb: &str, suffix: &str) -> String {
        format!("{}{}{}", verb, self.display, suffix)
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table)
    }
}
