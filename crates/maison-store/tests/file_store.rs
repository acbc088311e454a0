//! # File Store Integration Tests
//!
//! Exercises the durable backend against a real directory: round trips,
//! enumeration order, tolerance of planted garbage, and the review-update
//! path writing through to disk.

use anyhow::Result;

use maison_core::{AreaUnit, ProfileId, RoomSize, Timestamp};
use maison_profile::{
    Budget, ClientProfile, Dimensions, PreferenceTags, ReviewState, ReviewStatus, SpaceDetails,
    StyleWeight, SCHEMA_VERSION,
};
use maison_store::{profile_key, FileStore, ProfileStore};

fn profile_at(iso: &str) -> ClientProfile {
    ClientProfile {
        schema_version: SCHEMA_VERSION,
        id: ProfileId::new(),
        created_at: Timestamp::parse(iso).unwrap(),
        space: SpaceDetails {
            room_size: RoomSize::new(37.0, AreaUnit::SquareMeters),
            dimensions: Dimensions {
                width: Some(96.0),
                depth: None,
                height: None,
            },
        },
        style: vec![
            StyleWeight {
                style: "Midcentury".into(),
                weight_percent: 50.0,
            },
            StyleWeight {
                style: "Traditional".into(),
                weight_percent: 50.0,
            },
        ],
        preferences: PreferenceTags {
            colors: vec!["earth tones".into()],
            comfort: vec![],
            features: vec!["recliner".into()],
        },
        usage: None,
        budget: Budget {
            amount: 1800.0,
            payment_method: Some("financing".into()),
        },
        room_photos: Vec::new(),
        review: ReviewState::pending(),
    }
}

#[test]
fn write_then_read_one_round_trips_through_disk() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = FileStore::open(dir.path())?;

    let profile = profile_at("2026-08-07T10:00:00Z");
    store.write(&profile)?;

    // A second handle over the same directory sees the record.
    let reopened = FileStore::open(dir.path())?;
    let loaded = reopened.read_one(&profile.id)?.expect("profile on disk");
    assert_eq!(loaded, profile);
    Ok(())
}

#[test]
fn read_all_orders_newest_first() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = FileStore::open(dir.path())?;

    let t1 = profile_at("2026-08-01T08:00:00Z");
    let t2 = profile_at("2026-08-02T08:00:00Z");
    let t3 = profile_at("2026-08-03T08:00:00Z");
    store.write(&t2)?;
    store.write(&t1)?;
    store.write(&t3)?;

    let all = store.read_all()?;
    let ids: Vec<_> = all.iter().map(|p| p.id.clone()).collect();
    assert_eq!(ids, vec![t3.id, t2.id, t1.id]);
    Ok(())
}

#[test]
fn read_all_skips_planted_garbage() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = FileStore::open(dir.path())?;

    let profile = profile_at("2026-08-07T10:00:00Z");
    store.write(&profile)?;

    // A truncated record and an unrelated file in the same directory.
    std::fs::write(dir.path().join("profile-truncated.json"), "{\"id\": ")?;
    std::fs::write(dir.path().join("notes.txt"), "not a profile")?;

    let all = store.read_all()?;
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, profile.id);
    Ok(())
}

#[test]
fn read_one_on_corrupt_record_is_none() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = FileStore::open(dir.path())?;

    let id = ProfileId::new();
    std::fs::write(
        dir.path().join(format!("{}.json", profile_key(&id))),
        "corrupt",
    )?;
    assert!(store.read_one(&id)?.is_none());
    Ok(())
}

#[test]
fn update_review_state_persists_to_disk() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = FileStore::open(dir.path())?;

    let profile = profile_at("2026-08-07T10:00:00Z");
    store.write(&profile)?;
    store.update_review_state(&profile.id, "swap the sofa for a sectional")?;

    let reopened = FileStore::open(dir.path())?;
    let loaded = reopened.read_one(&profile.id)?.expect("profile on disk");
    assert_eq!(loaded.review.status, ReviewStatus::Reviewed);
    assert_eq!(loaded.review.feedback, "swap the sofa for a sectional");
    assert!(loaded.review.reviewed_at.is_some());

    // Everything outside the review sub-record is untouched.
    assert_eq!(loaded.space, profile.space);
    assert_eq!(loaded.style, profile.style);
    assert_eq!(loaded.budget, profile.budget);
    assert_eq!(loaded.created_at, profile.created_at);
    Ok(())
}

#[test]
fn update_review_state_missing_profile_errors() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut store = FileStore::open(dir.path())?;
    assert!(store
        .update_review_state(&ProfileId::new(), "nothing here")
        .is_err());
    Ok(())
}
