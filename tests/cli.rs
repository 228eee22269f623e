//! 命令行集成测试

mod common;

//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use assert_cmd::prelude::*;
    use serde_json::Value;
    use std::process::Command;

    use internalize::{Codec, CodecKind};

    use crate::common::Fixture;

    fn internalize() -> Command {
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
        for name in [
            "INTERNALIZE_SOURCE_FOLDER",
            "INTERNALIZE_CSS_PATH",
            "INTERNALIZE_VERSION",
            "INTERNALIZE_CODEC",
            "INTERNALIZE_LOG_LEVEL",
        ] {
            cmd.env_remove(name);
        }
        cmd.env("NO_COLOR", "1");
        cmd
    }

    #[test]
    fn inline_css_to_stdout() {
        let fixture = Fixture::new();
        fixture.write("site.css", "p{}");
        let page = fixture.write("index.html", r#"<link type="text/css" href="site.css">"#);

        let out = internalize()
            .args(["inline", "--kind", "css", "--source-folder"])
            .arg(fixture.folder())
            .arg(&page)
            .output()
            .unwrap();

        assert!(out.status.success());
        assert_eq!(
            String::from_utf8_lossy(&out.stdout),
            "<style type=\"text/css\">p{}</style>\n"
        );
    }

    #[test]
    fn inline_js_into_out_dir() {
        let fixture = Fixture::new();
        fixture.write("app.js", "run();");
        let page = fixture.write("src/index.html", r#"<script src="app.js"></script>"#);

        let out = internalize()
            .args(["inline", "--kind", "js", "--source-folder"])
            .arg(fixture.folder())
            .arg("--out-dir")
            .arg(fixture.path().join("dist"))
            .arg(&page)
            .output()
            .unwrap();

        assert!(out.status.success());
        assert!(out.stdout.is_empty());
        assert_eq!(
            fixture.read("dist/index.html"),
            "<script>\nrun();</script>"
        );
        assert_eq!(
            fixture.read("src/index.html"),
            r#"<script src="app.js"></script>"#
        );
    }

    #[test]
    fn source_folder_from_environment() {
        let fixture = Fixture::new();
        fixture.write("lib.js", "x");
        let page = fixture.write("index.html", r#"<script src="lib.js"></script>"#);

        let out = internalize()
            .env("INTERNALIZE_SOURCE_FOLDER", fixture.folder())
            .args(["inline", "--kind", "js"])
            .arg(&page)
            .output()
            .unwrap();

        assert!(out.status.success());
        assert_eq!(String::from_utf8_lossy(&out.stdout), "<script>\nx</script>\n");
    }

    #[test]
    fn config_file_supplies_marker() {
        let fixture = Fixture::new();
        fixture.write("en.json", "{}");
        let config = fixture.write(
            "internalize.toml",
            format!("source_folder = \"{}\"\ndelimiter = \"//@@\"\n", fixture.folder()),
        );
        let script = fixture.write("app.js", "//@@");

        let out = internalize()
            .args(["inline", "--kind", "translations", "--config"])
            .arg(&config)
            .arg(&script)
            .output()
            .unwrap();

        assert!(out.status.success());
        assert_eq!(
            String::from_utf8_lossy(&out.stdout),
            "//TRANSLATIONS\n$translateProvider.translations('en', {});\n//@@\n"
        );
    }

    #[test]
    fn compress_with_regions_and_data() {
        let fixture = Fixture::new();
        let page = fixture.write("index.html", "<main>\none\ntwo\n</main>");
        let data = fixture.write("data.json", r#"{"build": {"id": 9}}"#);

        let out = internalize()
            .args([
                "compress",
                "--version-tag",
                "1.0.0",
                "--region",
                "main=<main>,</main>",
                "--data-file",
            ])
            .arg(&data)
            .arg(&page)
            .output()
            .unwrap();

        assert!(out.status.success());
        let payload: Value = serde_json::from_slice(&out.stdout).unwrap();
        assert_eq!(payload["version"], "1.0.0");
        assert_eq!(payload["build"]["id"], 9);

        let region = CodecKind::LzString
            .codec()
            .decompress(payload["main"].as_str().unwrap())
            .unwrap();
        assert_eq!(region, r#"["one","two"]"#);
    }

    #[test]
    fn directories_are_skipped() {
        let fixture = Fixture::new();
        std::fs::create_dir_all(fixture.path().join("assets")).unwrap();

        let out = internalize()
            .args(["inline", "--kind", "css"])
            .arg(fixture.path().join("assets"))
            .output()
            .unwrap();

        assert!(out.status.success());
        assert!(out.stdout.is_empty());
    }

    #[test]
    fn env_docs() {
        let out = internalize().arg("env-docs").output().unwrap();

        assert!(out.status.success());
        assert!(String::from_utf8_lossy(&out.stdout).contains("INTERNALIZE_CODEC"));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use assert_cmd::prelude::*;
    use std::process::Command;

    use crate::common::Fixture;

    fn internalize() -> Command {
        let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
        cmd.env_remove("INTERNALIZE_SOURCE_FOLDER");
        cmd.env("NO_COLOR", "1");
        cmd
    }

    #[test]
    fn no_arguments() {
        let out = internalize().output().unwrap();
        assert!(!out.status.success());
    }

    #[test]
    fn unknown_kind_reports_each_document() {
        let fixture = Fixture::new();
        let a = fixture.write("a.html", "a");
        let b = fixture.write("b.html", "b");

        let out = internalize()
            .args(["inline", "--silent", "--kind", "xml"])
            .arg(&a)
            .arg(&b)
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(1));
        assert!(out.stdout.is_empty());
        let stderr = String::from_utf8_lossy(&out.stderr);
        assert_eq!(
            stderr
                .matches("Type must be [css|js|angular-template|resources|translations], got \"xml\"")
                .count(),
            2
        );
    }

    #[test]
    fn missing_asset_aborts() {
        let fixture = Fixture::new();
        let page = fixture.write("index.html", r#"<script src="nope.js"></script>"#);

        let out = internalize()
            .args(["inline", "--kind", "js", "--source-folder"])
            .arg(fixture.folder())
            .arg(&page)
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(1));
        assert!(out.stdout.is_empty());
        assert!(String::from_utf8_lossy(&out.stderr).contains("nope.js"));
    }

    #[test]
    fn out_dir_name_collision() {
        let fixture = Fixture::new();
        let first = fixture.write("a/index.html", "<p>a</p>");
        let second = fixture.write("b/index.html", "<p>b</p>");

        let out = internalize()
            .args(["inline", "--kind", "css", "--out-dir"])
            .arg(fixture.path().join("dist"))
            .arg(&first)
            .arg(&second)
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&out.stderr).contains("already writes"));
        assert!(!fixture.path().join("dist/index.html").exists());
    }

    #[test]
    fn malformed_region() {
        let fixture = Fixture::new();
        let page = fixture.write("index.html", "x");

        let out = internalize()
            .args(["compress", "--region", "main"])
            .arg(&page)
            .output()
            .unwrap();

        assert!(!out.status.success());
    }

    #[test]
    fn unknown_config_key() {
        let fixture = Fixture::new();
        let config = fixture.write("bad.toml", "sourceFolder = \"x\"\n");
        let page = fixture.write("index.html", "x");

        let out = internalize()
            .args(["inline", "--kind", "css", "--config"])
            .arg(&config)
            .arg(&page)
            .output()
            .unwrap();

        assert_eq!(out.status.code(), Some(1));
    }
}
