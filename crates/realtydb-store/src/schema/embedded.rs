//! Embedded SQL scripts
//!
//! Scripts are embedded at compile time using include_str!

/// Setup script metadata
pub struct SetupScript {
    pub id: &'static str,
    pub sql: &'static str,
}

/// All setup scripts in application order
pub fn get_scripts() -> Vec<SetupScript> {
    vec![
        SetupScript {
            id: "001_schema",
            sql: include_str!("../../sql/001_schema.sql"),
        },
        SetupScript {
            id: "002_seed",
            sql: include_str!("../../sql/002_seed.sql"),
        },
    ]
}
