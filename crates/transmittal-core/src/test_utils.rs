//! Shared test fixtures for transmittal crates
//!
//! Used by the unit tests here and by the renderer crates' tests.

use chrono::{NaiveDate, NaiveDateTime};
use transmittal_ast::{DocumentRecord, Recipient};

use crate::assets::{AssetBundle, LogoSlot};

/// A valid 1x1 RGBA PNG
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1f,
    0x15, 0xc4, 0x89, 0x00, 0x00, 0x00, 0x0d, 0x49, 0x44, 0x41, 0x54, 0x78, 0xda, 0x63, 0x64,
    0x60, 0xf8, 0x5f, 0x0f, 0x00, 0x02, 0x87, 0x01, 0x80, 0xeb, 0x47, 0xba, 0x92, 0x00, 0x00,
    0x00, 0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82,
];

/// All four logos, each the same tiny PNG
pub fn sample_assets() -> AssetBundle {
    let mut bundle = AssetBundle::new();
    for slot in LogoSlot::ALL {
        bundle.insert(slot, TINY_PNG.to_vec()).unwrap();
    }
    bundle
}

/// An ordinance approved on 21 January 2024 with two recipients
pub fn sample_record() -> DocumentRecord {
    DocumentRecord {
        no: Some("2024-017".to_string()),
        document_type: Some("ordinance".to_string()),
        title: Some("An Ordinance Regulating Tricycle Fares Within the City".to_string()),
        committee_sponsor: Some("Hon. Carlos Mendoza".to_string()),
        date_approved: Some("2024-01-21".to_string()),
        transmitted_recipients: vec![
            Recipient {
                id: Some(1),
                name: Some("Engr. Rosa Dela Cruz".to_string()),
                designation: Some("City Transport and Traffic Management Office".to_string()),
                address: Some("City Hall Annex".to_string()),
            },
            Recipient::with_designation("Office of the City Treasurer"),
        ],
    }
}

/// 25 January 2024, 2:30 PM
pub fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 25)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}
