/* tests/store_tests.rs */

use hotini::holder::{ConfigError, Store};
use std::collections::HashSet;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

const SECTION1: &str = "\
# personal data
[section1]
name = ljd
age = 20          # years
height = 180.1
";

fn write(path: &Path, content: &str) {
	std::fs::write(path, content).unwrap();
}

#[test]
fn test_store_round_trip() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("s.cfg");
	write(&path, "[s]\nk = v\n");

	let store = Store::open([&path])?;
	assert_eq!(&store.get("s")?["k"], "v");
	assert_eq!(store.get_value("s", "k").as_deref(), Some("v"));
	assert_eq!(store.sources(), vec![path]);
	Ok(())
}

#[test]
fn test_store_typed_accessors() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("t1.cfg");
	write(&path, SECTION1);

	let store = Store::open([&path])?;
	let c = store.must_get("section1");
	assert_eq!(c.get_int("age")?, 20);
	assert_eq!(c.get_float("height")?, 180.1);
	assert!(matches!(c.get_int("name"), Err(ConfigError::ParseInt { .. })));
	Ok(())
}

#[test]
fn test_store_sections() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("ab.cfg");
	write(&path, "[A]\nx = 1\n[B]\n");

	let store = Store::open([&path])?;
	let expected: HashSet<String> = ["A", "B"].into_iter().map(String::from).collect();
	assert_eq!(store.sections(), expected);
	assert_eq!(store.len(), 2);
	Ok(())
}

#[test]
fn test_store_missing_section() {
	let store = Store::new();
	assert!(matches!(
		store.get("missing"),
		Err(ConfigError::SectionNotFound { ref section }) if section == "missing"
	));
	assert!(store.is_empty());
}

#[test]
#[should_panic(expected = "section missing not found")]
fn test_store_must_get_missing_panics() {
	let store = Store::new();
	store.must_get("missing");
}

#[test]
fn test_store_later_file_wins() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let base = dir.path().join("base.cfg");
	let local = dir.path().join("local.cfg");
	write(&base, "[db]\nhost = localhost\nport = 5432\n");
	write(&local, "[db]\nhost = db.internal\n[extra]\nk = v\n");

	let store = Store::open([&base, &local])?;
	let db = store.get("db")?;
	assert_eq!(&db["host"], "db.internal");
	assert_eq!(&db["port"], "5432");
	assert!(store.contains_section("extra"));
	Ok(())
}

#[test]
fn test_store_missing_files_are_skipped() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let present = dir.path().join("present.cfg");
	write(&present, "[s]\nk = v\n");

	let store = Store::open([dir.path().join("absent.cfg"), present])?;
	assert_eq!(&store.get("s")?["k"], "v");
	Ok(())
}

#[test]
fn test_store_unreadable_file_keeps_previous_state() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let good = dir.path().join("good.cfg");
	write(&good, "[s]\nk = v\n");

	let store = Store::open([&good])?;

	// A directory exists but cannot be read as text.
	let err = store.initialize([dir.path().to_path_buf()]).unwrap_err();
	assert!(matches!(err, ConfigError::Io { ref path, .. } if path == dir.path()));

	assert_eq!(&store.get("s")?["k"], "v");
	assert_eq!(store.sources(), vec![good]);
	Ok(())
}

#[test]
fn test_store_invalid_utf8_is_not_an_error() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("latin1.cfg");
	// Latin-1 `é` in a comment and in a value.
	std::fs::write(&path, b"# caf\xe9\n[s]\nk = v\nname = jos\xe9\n")?;

	let store = Store::open([&path])?;
	let s = store.get("s")?;
	assert_eq!(&s["k"], "v");
	assert_eq!(&s["name"], "jos\u{fffd}");

	store.merge_reader(&b"[t]\nx = \xff1\n"[..])?;
	assert_eq!(&store.get("t")?["x"], "\u{fffd}1");
	Ok(())
}

#[test]
fn test_store_reinitialize() -> Result<(), Box<dyn std::error::Error>> {
	let store = Store::new();
	assert!(matches!(store.reinitialize(), Err(ConfigError::NotInitialized)));

	let dir = tempfile::tempdir()?;
	let path = dir.path().join("s.cfg");
	write(&path, "[s]\nk = v\n");
	store.initialize([&path])?;

	write(&path, "[s]\nk = w\n");
	assert_eq!(&store.get("s")?["k"], "v");
	store.reinitialize()?;
	assert_eq!(&store.get("s")?["k"], "w");
	Ok(())
}

#[test]
fn test_store_get_returns_detached_copy() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("s.cfg");
	write(&path, "[s]\nk = v\n");
	let store = Store::open([&path])?;

	let mut copy = store.get("s")?;
	copy.insert("k", "changed");
	copy.insert("new", "1");

	let fresh = store.get("s")?;
	assert_eq!(&fresh["k"], "v");
	assert!(!fresh.contains_key("new"));

	// Held copies survive a reload untouched.
	write(&path, "[s]\nk = reloaded\n");
	store.reinitialize()?;
	assert_eq!(&fresh["k"], "v");
	Ok(())
}

#[test]
fn test_store_merge_reader() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("s.cfg");
	write(&path, "[s]\na = 1\nb = 2\n");
	let store = Store::open([&path])?;

	store.merge_reader("[s]\nb = 20\n[t]\nc = 3\n".as_bytes())?;
	assert_eq!(&store.get("s")?["a"], "1");
	assert_eq!(&store.get("s")?["b"], "20");
	assert_eq!(&store.get("t")?["c"], "3");

	// Reloading from files drops merged overrides.
	store.reinitialize()?;
	assert_eq!(&store.get("s")?["b"], "2");
	assert!(!store.contains_section("t"));
	Ok(())
}

#[test]
fn test_store_reload_reports_changes() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("t1.cfg");
	write(&path, SECTION1);
	let store = Store::open([&path])?;

	write(
		&path,
		"[section1]\nname = other\nage = 20\nheight = 180.1\n[fresh]\nk = v\n",
	);
	let changes = store.reload()?;
	assert_eq!(changes.len(), 1);
	assert_eq!(changes[0].section, "section1");
	assert_eq!(changes[0].key, "name");
	assert_eq!(changes[0].value, "other");

	// Nothing changed on disk since the last pass.
	assert!(store.reload()?.is_empty());
	Ok(())
}

#[test]
fn test_store_readers_never_see_mixed_generations() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("pair.cfg");
	write(&path, "[pair]\na = 0\nb = 0\n");
	let store = Store::open([&path])?;
	let done = AtomicBool::new(false);

	std::thread::scope(|scope| {
		for _ in 0..4 {
			scope.spawn(|| {
				while !done.load(Ordering::Relaxed) {
					let pair = store.must_get("pair");
					assert_eq!(pair.get("a"), pair.get("b"));
				}
			});
		}

		scope.spawn(|| {
			for i in 1..200 {
				write(&path, &format!("[pair]\na = {i}\nb = {i}\n"));
				store.reinitialize().unwrap();
			}
			done.store(true, Ordering::Relaxed);
		});
	});

	assert_eq!(store.must_get("pair").get_int("a")?, 199);
	Ok(())
}
