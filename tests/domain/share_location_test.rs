use lyrebird::domain::ShareLocation;

fn location(host: &str, share: &str, file_path: &str) -> ShareLocation {
    ShareLocation::new(host, share, "svc-user", "hunter2", file_path)
}

#[test]
fn given_location_when_debug_formatting_then_password_is_redacted() {
    let loc = location("nas.local", "Music", "album/track.flac");
    let rendered = format!("{:?}", loc);
    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn given_smb_uri_host_when_resolving_then_scheme_and_path_are_stripped() {
    let loc = location("smb://nas.local/Music", "Music", "track.flac");
    assert_eq!(loc.host(), "nas.local");
    assert_eq!(loc.server_uri(), "smb://nas.local");
}

#[test]
fn given_bare_host_when_resolving_then_it_is_kept_as_is() {
    let loc = location("192.168.1.20", "Music", "track.flac");
    assert_eq!(loc.host(), "192.168.1.20");
    assert_eq!(loc.server_uri(), "smb://192.168.1.20");
}

#[test]
fn given_share_name_when_building_root_then_it_is_absolute() {
    assert_eq!(location("nas", "Music", "t.flac").share_root(), "/Music");
    assert_eq!(location("nas", "/Music/", "t.flac").share_root(), "/Music");
}

#[test]
fn given_backslash_path_when_normalizing_then_separators_become_slashes() {
    let loc = location("nas", "Music", r"album\disc 1\track.flac");
    assert_eq!(loc.normalized_path(), "/album/disc 1/track.flac");
}

#[test]
fn given_relative_path_when_normalizing_then_a_leading_slash_is_added() {
    let loc = location("nas", "Music", "album/track.flac");
    assert_eq!(loc.normalized_path(), "/album/track.flac");
}
