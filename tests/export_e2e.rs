// tests/export_e2e.rs
//
// Saved page / saved API response → file on disk, through the runner.
//
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::thread;

use playlist_scrape::config::options::{AppOptions, ExportOptions, Source};
use playlist_scrape::{runner, Diagnostics, PlaylistError, PlaylistFormat, Severity};

const PAGE_URL: &str = "https://catalog.example.org/release/pink-floyd-the-wall-1979";

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn album_opts(format: PlaylistFormat, out: Option<PathBuf>) -> AppOptions {
    AppOptions {
        source: Source::HtmlFile { path: fixture("album.html"), page_url: PAGE_URL.into() },
        export: ExportOptions { format, out, ..Default::default() },
    }
}

/// One-shot local HTTP server answering every request with `status`.
fn serve_once(status: &'static str, body: &'static str) -> (String, thread::JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
            line.clear();
        }
        let mut stream = stream;
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
        stream.flush().unwrap();
    });
    (base, handle)
}

#[test]
fn album_page_to_xspf_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut out = dir.path().to_path_buf().into_os_string();
    out.push("/");
    let opts = album_opts(PlaylistFormat::Xspf, Some(out.into()));

    let mut diags = Diagnostics::new();
    let summary = runner::run(&opts, &mut diags).unwrap();

    let path = summary.path.clone().unwrap();
    assert_eq!(path.file_name().unwrap(), "Pink Floyd (1979) - The Wall.xspf");
    assert_eq!(summary.track_count, 2);

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, summary.document);
    assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(text.contains(&format!("<location>{PAGE_URL}</location>")));
    assert!(text.contains("<location>https://catalog.example.org/track/dl/101/in-the-flesh.mp3</location>"));
    assert!(text.contains("<title>Another Brick in the Wall, Part 1 &amp; 2</title>"));
    assert!(text.contains("<duration>429000</duration>"));
    assert!(text.contains("<album>The Wall</album>"));
    // album page: image sits on every track
    assert_eq!(text.matches("<image>https://catalog.example.org/img/covers/the-wall.jpg</image>").count(), 2);
    // the item without a download link is gone, order kept
    assert!(!text.contains("The Thin Ice"));
    assert!(text.find("In the Flesh?").unwrap() < text.find("Another Brick").unwrap());

    assert!(diags.iter().any(|d| d.severity == Severity::Warn && d.message.contains("Item Index 1")));
}

#[test]
fn album_page_to_m3u_on_stdout() {
    let mut opts = album_opts(PlaylistFormat::M3u, None);
    opts.export.stdout = true;

    let mut diags = Diagnostics::new();
    let summary = runner::run(&opts, &mut diags).unwrap();

    assert_eq!(summary.path, None);
    assert_eq!(summary.suggested_filename, "Pink Floyd (1979) - The Wall.m3u");
    assert_eq!(
        summary.document,
        "#EXTM3U\n\
         #EXTINF:199,Pink Floyd - In the Flesh?\n\
         https://catalog.example.org/track/dl/101/in-the-flesh.mp3\n\
         #EXTINF:429,Pink Floyd - Another Brick in the Wall, Part 1 & 2\n\
         https://cdn.example.net/103.mp3"
    );
}

#[test]
fn no_clobber_picks_next_free_name() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("wall.xspf");
    fs::write(&target, "keep me").unwrap();

    let mut opts = album_opts(PlaylistFormat::Xspf, Some(target.clone()));
    opts.export.no_clobber = true;
    let first = runner::run(&opts, &mut Diagnostics::new()).unwrap();
    let second = runner::run(&opts, &mut Diagnostics::new()).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");
    assert_eq!(first.path.unwrap(), dir.path().join("wall (2).xspf"));
    assert_eq!(second.path.unwrap(), dir.path().join("wall (3).xspf"));
}

#[test]
fn overwrites_without_no_clobber() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("wall.m3u");
    fs::write(&target, "old").unwrap();

    let summary = runner::run(&album_opts(PlaylistFormat::M3u, Some(target.clone())), &mut Diagnostics::new()).unwrap();
    assert_eq!(summary.path.as_deref(), Some(target.as_path()));
    assert!(fs::read_to_string(&target).unwrap().starts_with("#EXTM3U"));
}

#[test]
fn page_without_tracks_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let html = dir.path().join("empty.html");
    fs::write(&html, "<html><body><header class=\"content__title\"><h1>A - B (2001)</h1></header></body></html>").unwrap();
    let out = dir.path().join("out");

    let opts = AppOptions {
        source: Source::HtmlFile { path: html, page_url: PAGE_URL.into() },
        export: ExportOptions { out: Some(out.clone()), ..Default::default() },
    };
    let mut diags = Diagnostics::new();
    match runner::run(&opts, &mut diags) {
        Err(PlaylistError::NoTracksProduced { raw }) => assert_eq!(raw, 0),
        other => panic!("expected NoTracksProduced, got {other:?}"),
    }
    assert!(!out.exists());
    assert_eq!(diags.count(Severity::Error), 1);
}

#[test]
fn missing_html_file_is_io_error() {
    let opts = AppOptions::new(Source::HtmlFile {
        path: PathBuf::from("does/not/exist.html"),
        page_url: PAGE_URL.into(),
    });
    assert!(matches!(runner::run(&opts, &mut Diagnostics::new()), Err(PlaylistError::Io(_))));
}

#[test]
fn saved_invidious_response_to_m3u() {
    let opts = AppOptions {
        source: Source::InvidiousJson { path: fixture("invidious_playlist.json"), playlist: String::new() },
        export: ExportOptions { format: PlaylistFormat::M3u, stdout: true, ..Default::default() },
    };
    let mut diags = Diagnostics::new();
    let summary = runner::run(&opts, &mut diags).unwrap();

    assert_eq!(summary.suggested_filename, "Late Night _ Drive [Youtube].m3u");
    assert_eq!(summary.track_count, 2);
    assert_eq!(
        summary.document,
        "#EXTM3U\n\
         #EXTINF:258,Kavinsky - Nightcall\n\
         https://www.youtube.com/watch?v=MV_3Dpw-BRY\n\
         #EXTINF:268,College & Electric Youth - A Real Hero\n\
         https://www.youtube.com/watch?v=-DSVDcw6iW8"
    );
    assert!(diags.mentions("no videoId"));
}

#[test]
fn saved_invidious_response_to_xspf() {
    let opts = AppOptions {
        source: Source::InvidiousJson {
            path: fixture("invidious_playlist.json"),
            playlist: "https://www.youtube.com/playlist?list=PLx0sYbCqOb8TBPRdmBHs5Iftvv9TPboYG".into(),
        },
        export: ExportOptions { stdout: true, ..Default::default() },
    };
    let summary = runner::run(&opts, &mut Diagnostics::new()).unwrap();
    let x = &summary.document;
    assert!(x.contains("<location>https://www.youtube.com/playlist?list=PLx0sYbCqOb8TBPRdmBHs5Iftvv9TPboYG</location>"));
    assert!(x.contains("<album>Late Night / Drive</album>"));
    assert!(x.contains("<creator>College &amp; Electric Youth</creator>"));
    assert!(x.contains("<trackNum>3</trackNum>"));
    assert!(!x.contains("<image>"));
}

#[test]
fn youtube_source_without_playlist_id_is_invalid_input() {
    let opts = AppOptions::youtube("https://www.youtube.com/watch?v=MV_3Dpw-BRY");
    assert!(matches!(runner::run(&opts, &mut Diagnostics::new()), Err(PlaylistError::InvalidInput(_))));
}

#[test]
fn invidious_http_error_is_upstream_and_writes_nothing() {
    let (instance, server) = serve_once("404 Not Found", "not found");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("yt.xspf");

    let opts = AppOptions {
        source: Source::Invidious { playlist: "PL404".into(), instance },
        export: ExportOptions { out: Some(out.clone()), ..Default::default() },
    };
    match runner::run(&opts, &mut Diagnostics::new()) {
        Err(PlaylistError::Upstream { url, reason }) => {
            assert!(url.ends_with("/api/v1/playlists/PL404"));
            assert!(reason.contains("404"), "reason: {reason}");
        }
        other => panic!("expected Upstream, got {other:?}"),
    }
    server.join().unwrap();
    assert!(!out.exists());
}

#[test]
fn page_fetch_transport_error_is_upstream() {
    // Bind then drop: nothing listens on the port any more.
    let port = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap().port();
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("page.m3u");

    let opts = AppOptions {
        source: Source::PageUrl(format!("http://127.0.0.1:{port}/release/x")),
        export: ExportOptions { format: PlaylistFormat::M3u, out: Some(out.clone()), ..Default::default() },
    };
    assert!(matches!(runner::run(&opts, &mut Diagnostics::new()), Err(PlaylistError::Upstream { .. })));
    assert!(!out.exists());
}
