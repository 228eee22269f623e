//! 区域压缩集成测试

//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod passing {
    use serde_json::{json, Value};

    use internalize::{Codec, CodecKind, Compressor, Document, DocumentTransform, TransformConfig};

    const PAGE: &str = "<html>\n<head>\n<title>App</title>\n</head>\n<body>\n<main>\nhello\n</main>\n</body>\n</html>";

    #[test]
    fn named_regions_from_toml() {
        let config = TransformConfig::from_toml(
            r#"
            version = "3.1.0"

            [delimiters.main]
            start = "<main>"
            stop = "</main>"

            [delimiters.title]
            start = "<title>"
            stop = "</title>"

            [data]
            channel = "stable"
            "#,
        )
        .unwrap();
        let compressor = Compressor::new(config);
        let payload = compressor.compress_regions(PAGE).unwrap();

        let keys: Vec<&str> = payload.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["version", "main", "title", "channel"]);
        assert_eq!(payload["version"], json!("3.1.0"));
        assert_eq!(payload["channel"], json!("stable"));
        assert_eq!(
            compressor
                .decompress_region(payload["main"].as_str().unwrap())
                .unwrap(),
            vec!["hello"]
        );
        assert_eq!(
            compressor
                .decompress_region(payload["title"].as_str().unwrap())
                .unwrap(),
            vec!["App"]
        );
    }

    #[test]
    fn legacy_head_and_body() {
        let compressor = Compressor::new(TransformConfig::default());
        let payload = compressor.compress_regions(PAGE).unwrap();

        assert_eq!(
            compressor
                .decompress_region(payload["head"].as_str().unwrap())
                .unwrap(),
            vec!["<title>App</title>"]
        );
        assert_eq!(
            compressor
                .decompress_region(payload["body"].as_str().unwrap())
                .unwrap(),
            vec!["<main>", "hello", "</main>"]
        );
    }

    #[test]
    fn region_spans_to_last_stop_marker() {
        let config = TransformConfig::from_toml(
            r#"
            [delimiters.list]
            start = "<li>"
            stop = "</li>"
            "#,
        )
        .unwrap();
        let compressor = Compressor::new(config);
        let payload = compressor.compress_regions("<li>a</li><li>b</li>").unwrap();

        assert_eq!(
            compressor
                .decompress_region(payload["list"].as_str().unwrap())
                .unwrap(),
            vec!["a</li><li>b"]
        );
    }

    #[test]
    fn deflate_codec() {
        let config = TransformConfig {
            codec: Some(CodecKind::Deflate),
            ..TransformConfig::default()
        };
        let compressor = Compressor::new(config);
        let payload = compressor.compress_regions(PAGE).unwrap();

        let encoded = payload["head"].as_str().unwrap();
        assert_eq!(
            CodecKind::Deflate.codec().decompress(encoded).unwrap(),
            r#"["<title>App</title>"]"#
        );
    }

    #[test]
    fn document_becomes_json() {
        let compressor = Compressor::new(TransformConfig::default());
        let output = compressor
            .transform(Document::buffer("index.html", PAGE))
            .unwrap()
            .unwrap();

        let parsed: Value = serde_json::from_str(&output.text().unwrap()).unwrap();
        assert_eq!(parsed["version"], json!("undefined"));
        assert!(parsed["head"].is_string());
        assert!(parsed["body"].is_string());
    }

    #[test]
    fn directory_passes_through() {
        let compressor = Compressor::new(TransformConfig::default());
        let directory = Document::directory("dist");
        assert_eq!(
            compressor.transform(directory.clone()).unwrap(),
            Some(directory)
        );
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
    use internalize::{
        Compressor, Document, DocumentTransform, InternalizeError, Payload, TransformConfig,
    };

    #[test]
    fn stream_payload() {
        let compressor = Compressor::new(TransformConfig::default());
        assert!(matches!(
            compressor.transform(Document::new("a.html", Payload::Stream)),
            Err(InternalizeError::UnsupportedPayloadKind { .. })
        ));
    }

    #[test]
    fn undecodable_region() {
        let compressor = Compressor::new(TransformConfig::default());
        assert!(compressor.decompress_region("@@not base64@@").is_err());
    }

    #[test]
    fn unknown_codec_in_config() {
        assert!(TransformConfig::from_toml("codec = \"zip\"").is_err());
    }
}
