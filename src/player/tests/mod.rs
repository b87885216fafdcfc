//! Unit tests for player discovery and launch-spec construction.
//!
//! Uses closure-backed resolvers and hand-built catalog entries; no real
//! player binaries are touched.

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use super::{LaunchSpec, LocatedPlayer, PlayMode, PlayerError, PlayerKind, locate};
use crate::catalog::MediaEntry;

fn resolver_with(available: &'static [&'static str]) -> impl Fn(&str) -> Option<PathBuf> {
    move |name: &str| {
        available
            .contains(&name)
            .then(|| PathBuf::from(format!("/usr/bin/{name}")))
    }
}

fn player(kind: PlayerKind) -> LocatedPlayer {
    LocatedPlayer {
        kind,
        path: PathBuf::from(format!("/usr/bin/{}", kind.binary_name())),
    }
}

fn entries(names: &[&str]) -> Vec<MediaEntry> {
    names
        .iter()
        .map(|name| MediaEntry::new((*name).to_string(), PathBuf::from(format!("/media/{name}"))))
        .collect()
}

#[test]
fn locate_prefers_priority_order() {
    let resolver = resolver_with(&["mpv", "mplayer", "vlc", "ffplay"]);
    let located = locate(&resolver, None).unwrap();

    assert_eq!(located.kind, PlayerKind::Mpv);
    assert_eq!(located.path, PathBuf::from("/usr/bin/mpv"));
}

#[test]
fn locate_falls_back_to_later_candidates() {
    let resolver = resolver_with(&["vlc", "ffplay"]);
    let located = locate(&resolver, None).unwrap();

    assert_eq!(located.kind, PlayerKind::Vlc);
}

#[test]
fn locate_reports_no_player_available() {
    let resolver = resolver_with(&[]);
    let result = locate(&resolver, None);

    assert!(matches!(result, Err(PlayerError::NoPlayerAvailable)));
}

#[test]
fn locate_probes_preferred_player_first() {
    let resolver = resolver_with(&["mpv", "mplayer", "vlc", "ffplay"]);
    let located = locate(&resolver, Some(PlayerKind::Ffplay)).unwrap();

    assert_eq!(located.kind, PlayerKind::Ffplay);
}

#[test]
fn locate_ignores_unavailable_preferred_player() {
    let resolver = resolver_with(&["mplayer"]);
    let located = locate(&resolver, Some(PlayerKind::Vlc)).unwrap();

    assert_eq!(located.kind, PlayerKind::Mplayer);
}

#[test]
fn mpv_single_file_args() {
    let spec = LaunchSpec::build(
        &player(PlayerKind::Mpv),
        PlayMode::Single(PathBuf::from("/media/a.mp3")),
        &[],
        &[],
    )
    .unwrap();

    assert_eq!(spec.program, PathBuf::from("/usr/bin/mpv"));
    assert_eq!(spec.args, ["--no-video", "--really-quiet", "/media/a.mp3"]);
    assert!(spec.note.is_none());
}

#[test]
fn mplayer_single_file_has_no_flags() {
    let spec = LaunchSpec::build(
        &player(PlayerKind::Mplayer),
        PlayMode::Single(PathBuf::from("/media/a.mp3")),
        &[],
        &[],
    )
    .unwrap();

    assert_eq!(spec.args, ["/media/a.mp3"]);
}

#[test]
fn vlc_all_files_keeps_listing_order() {
    let listing = entries(&["a.mp3", "b.mp4", "c.ogg"]);
    let spec = LaunchSpec::build(&player(PlayerKind::Vlc), PlayMode::All, &listing, &[]).unwrap();

    assert_eq!(
        spec.args,
        [
            "--intf",
            "dummy",
            "--play-and-exit",
            "/media/a.mp3",
            "/media/b.mp4",
            "/media/c.ogg",
        ]
    );
}

#[test]
fn extra_args_come_before_file_paths() {
    let spec = LaunchSpec::build(
        &player(PlayerKind::Mpv),
        PlayMode::Single(PathBuf::from("/media/a.mp3")),
        &[],
        &["--volume=50".to_string()],
    )
    .unwrap();

    assert_eq!(
        spec.args,
        ["--no-video", "--really-quiet", "--volume=50", "/media/a.mp3"]
    );
}

#[test]
fn ffplay_all_files_degrades_to_first_file() {
    let listing = entries(&["a.mp3", "b.mp4", "c.ogg"]);
    let spec =
        LaunchSpec::build(&player(PlayerKind::Ffplay), PlayMode::All, &listing, &[]).unwrap();

    assert_eq!(spec.args, ["-nodisp", "-autoexit", "/media/a.mp3"]);
    assert!(spec.note.is_some());
}

#[test]
fn ffplay_rejects_shuffle_mode() {
    let listing = entries(&["a.mp3", "b.mp4"]);
    let result = LaunchSpec::build(&player(PlayerKind::Ffplay), PlayMode::Shuffle, &listing, &[]);

    assert!(matches!(
        result,
        Err(PlayerError::UnsupportedMode {
            player: PlayerKind::Ffplay,
            mode: "shuffle",
        })
    ));
}

#[test]
fn shuffle_is_a_permutation_of_the_listing() {
    let listing = entries(&["a.mp3", "b.mp4", "c.ogg", "d.wav", "e.flac"]);
    let spec =
        LaunchSpec::build(&player(PlayerKind::Mpv), PlayMode::Shuffle, &listing, &[]).unwrap();

    let mut shuffled: Vec<&str> = spec.args[2..].iter().map(String::as_str).collect();
    shuffled.sort_unstable();

    assert_eq!(
        shuffled,
        [
            "/media/a.mp3",
            "/media/b.mp4",
            "/media/c.ogg",
            "/media/d.wav",
            "/media/e.flac",
        ]
    );
}

#[test]
fn multi_file_modes_require_a_non_empty_catalog() {
    let all = LaunchSpec::build(&player(PlayerKind::Mpv), PlayMode::All, &[], &[]);
    let shuffle = LaunchSpec::build(&player(PlayerKind::Mpv), PlayMode::Shuffle, &[], &[]);

    assert!(matches!(all, Err(PlayerError::NoMediaFiles)));
    assert!(matches!(shuffle, Err(PlayerError::NoMediaFiles)));
}
