//! File-backed storage and repositories over a real directory.

mod common;

use common::{record, record_codec, temp_dir, Record, LOCATOR};
use ttsync::adapters::cache::CachedRepository;
use ttsync::domain::ports::EntityCodec;
use std::fs;
use std::sync::Arc;
use std::time::Duration;
use ttsync::adapters::repositories::{SportsHallRepository, TeamLeadRepository};
use ttsync::domain::models::{Config, SportsHall, TeamLead};
use ttsync::domain::ports::Storage;
use ttsync::infrastructure::logging::RecordingLogger;
use ttsync::infrastructure::setup::Repositories;
use ttsync::infrastructure::storage::FileStorage;

fn storage_in(dir: &std::path::Path) -> Arc<FileStorage> {
    Arc::new(FileStorage::new(dir, Duration::from_secs(5)))
}

fn hall(club: &str, number: u32, name: &str) -> SportsHall {
    SportsHall {
        club: club.to_string(),
        number,
        name: name.to_string(),
        street: "Hauptstr. 1".to_string(),
        postal_code: "20095".to_string(),
        city: "Hamburg".to_string(),
    }
}

#[tokio::test]
async fn test_read_missing_file_is_not_found() {
    let dir = temp_dir();
    let storage = storage_in(dir.path());

    let err = storage.read("absent.json").await.unwrap_err();
    assert!(err.is_not_found(), "got {err:?}");
}

#[tokio::test]
async fn test_write_creates_parent_directories() {
    let dir = temp_dir();
    let storage = storage_in(dir.path());

    storage.write("nested/deeper/data.json", "[]").await.unwrap();

    let on_disk = fs::read_to_string(dir.path().join("nested/deeper/data.json")).unwrap();
    assert_eq!(on_disk, "[]");
    assert_eq!(storage.read("nested/deeper/data.json").await.unwrap(), "[]");
}

#[tokio::test]
async fn test_write_replaces_content_without_leftovers() {
    let dir = temp_dir();
    let storage = storage_in(dir.path());

    storage.write("data.json", "first version, longer").await.unwrap();
    storage.write("data.json", "second").await.unwrap();

    assert_eq!(storage.read("data.json").await.unwrap(), "second");
    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries, vec!["data.json".to_string()], "temp files must not remain");
}

#[tokio::test]
async fn test_reading_a_directory_is_an_io_error() {
    let dir = temp_dir();
    fs::create_dir(dir.path().join("data.json")).unwrap();
    let storage = storage_in(dir.path());

    let err = storage.read("data.json").await.unwrap_err();
    assert!(!err.is_not_found());
}

#[tokio::test]
async fn test_team_leads_survive_a_restart() {
    let dir = temp_dir();
    let logger = Arc::new(RecordingLogger::new());

    {
        let leads =
            TeamLeadRepository::team_leads(storage_in(dir.path()), logger.clone(), "team-leads.json");
        let mut anna = TeamLead::new("TTC Nord", "Herren I", "Anna");
        anna.email = Some("anna@example.org".to_string());
        leads.save(anna).await.unwrap();
        leads.save(TeamLead::new("TTC Nord", "Damen I", "Berta")).await.unwrap();
        leads.save(TeamLead::new("TTC Nord", "Herren I", "Carl")).await.unwrap();
    }

    let reopened =
        TeamLeadRepository::team_leads(storage_in(dir.path()), logger.clone(), "team-leads.json");
    let all = reopened.get_all().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Carl");
    assert_eq!(all[0].email, None);
    assert_eq!(all[1].team, "Damen I");
    assert!(logger.errors().is_empty());
}

#[tokio::test]
async fn test_sports_halls_are_grouped_on_disk() {
    let dir = temp_dir();
    let halls = SportsHallRepository::sports_halls(
        storage_in(dir.path()),
        Arc::new(RecordingLogger::new()),
        "sports-halls.json",
    );

    halls.save(hall("TTC Nord", 1, "Nordhalle")).await.unwrap();
    halls.save(hall("SV Süd", 1, "Südhalle")).await.unwrap();
    halls.save(hall("TTC Nord", 2, "Schulhalle")).await.unwrap();

    let raw = fs::read_to_string(dir.path().join("sports-halls.json")).unwrap();
    let document: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(document["TTC Nord"].as_array().unwrap().len(), 2);
    assert_eq!(document["SV Süd"][0]["name"], "Südhalle");
    assert!(document["TTC Nord"][0].get("club").is_none());

    let reopened = SportsHallRepository::sports_halls(
        storage_in(dir.path()),
        Arc::new(RecordingLogger::new()),
        "sports-halls.json",
    );
    let nord = reopened.for_club("TTC Nord").await.unwrap();
    assert_eq!(nord.len(), 2);
    assert!(nord.iter().all(|h| h.club == "TTC Nord"));
}

#[tokio::test]
async fn test_repositories_from_config_use_data_dir() {
    let dir = temp_dir();
    let mut config = Config::default();
    config.data_dir = dir.path().join("data").to_string_lossy().into_owned();

    let repos = Repositories::from_config(&config);
    repos
        .team_leads
        .save(TeamLead::new("TTC Nord", "Herren I", "Anna"))
        .await
        .unwrap();
    assert!(repos.sports_halls.get_all().await.unwrap().is_empty());

    assert!(dir.path().join("data/team-leads.json").exists());
    assert!(!dir.path().join("data/sports-halls.json").exists());
}

#[tokio::test]
async fn test_timed_out_saves_agree_with_cache_and_disk() {
    let dir = temp_dir();
    let tight = Arc::new(FileStorage::new(dir.path(), Duration::from_nanos(1)));
    let repo = CachedRepository::new(record_codec(), tight, Arc::new(RecordingLogger::new()), LOCATOR);

    let mut saved = Vec::new();
    for id in 0..10 {
        if repo.save(record(id, "v")).await.is_ok() {
            saved.push(id);
        }
    }

    // Let abandoned staging tasks finish before looking at the disk.
    tokio::time::sleep(Duration::from_millis(200)).await;

    let on_disk: Vec<Record> = match storage_in(dir.path()).read(LOCATOR).await {
        Ok(content) => record_codec().deserialize(&content).unwrap(),
        Err(err) if err.is_not_found() => Vec::new(),
        Err(err) => panic!("unexpected read failure: {err:?}"),
    };
    let disk_ids: Vec<u32> = on_disk.iter().map(|r| r.id).collect();
    assert_eq!(disk_ids, saved, "only acknowledged saves may reach the disk");

    if let Ok(cached) = repo.get_all().await {
        assert_eq!(*cached, on_disk);
    }
}
