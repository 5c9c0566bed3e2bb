//! Tests for the Ollama HTTP client against a local stub server

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::{self, JoinHandle};
    use std::time::Duration;
    use texsynth::TextureError;
    use texsynth::advisory::ollama::OllamaAdvisory;
    use texsynth::advisory::service::AdvisoryService;
    use texsynth::io::configuration::AdvisoryConfig;

    /// One recorded request: request line and body
    type Recorded = (String, String);

    fn read_request(stream: &mut TcpStream) -> Recorded {
        let mut reader = BufReader::new(stream);
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0;
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            let header = header.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':') {
                if name.eq_ignore_ascii_case("content-length") {
                    content_length = value.trim().parse().unwrap();
                }
            }
        }

        let mut body = vec![0; content_length];
        reader.read_exact(&mut body).unwrap();
        (
            request_line.trim_end().to_string(),
            String::from_utf8(body).unwrap(),
        )
    }

    /// Serve one canned response per entry, in order, then stop
    fn serve(responses: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<Recorded>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let mut recorded = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().unwrap();
                recorded.push(read_request(&mut stream));
                let reply = format!(
                    "HTTP/1.1 {status} Stub\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(reply.as_bytes()).unwrap();
                stream.flush().unwrap();
            }
            recorded
        });
        (url, handle)
    }

    fn client(url: &str) -> OllamaAdvisory {
        OllamaAdvisory::new(AdvisoryConfig::new(url, "llama3.2")).unwrap()
    }

    // Tests the probe lists installed model names
    // Verified by probing the wrong path
    #[test]
    fn test_probe_lists_models() {
        let (url, server) = serve(vec![(
            200,
            r#"{"models":[{"name":"llama3.2:latest","size":1},{"name":"mistral:7b"}]}"#,
        )]);
        let capabilities = client(&url).list_capabilities().unwrap();
        assert!(capabilities.is_usable());
        assert_eq!(capabilities.models, vec!["llama3.2:latest", "mistral:7b"]);

        let recorded = server.join().unwrap();
        assert_eq!(recorded[0].0, "GET /api/tags HTTP/1.1");
    }

    // Tests a tags response without a models field reports unavailable
    // Verified by treating a missing list as empty but available
    #[test]
    fn test_probe_without_models_field() {
        let (url, server) = serve(vec![(200, "{}")]);
        let capabilities = client(&url).list_capabilities().unwrap();
        assert!(!capabilities.available);
        assert!(!capabilities.is_usable());
        server.join().unwrap();
    }

    // Tests generation posts a non-streaming request and returns the text
    // Verified by sending stream: true
    #[test]
    fn test_generate_posts_request() {
        let (url, server) = serve(vec![(
            200,
            r#"{"model":"llama3.2","response":"{\"pattern\":\"grid\"}","done":true}"#,
        )]);
        let generation = client(&url).generate("make it tiled").unwrap();
        assert_eq!(generation.text, r#"{"pattern":"grid"}"#);

        let recorded = server.join().unwrap();
        assert_eq!(recorded[0].0, "POST /api/generate HTTP/1.1");
        let body: serde_json::Value = serde_json::from_str(&recorded[0].1).unwrap();
        assert_eq!(body["model"], "llama3.2");
        assert_eq!(body["prompt"], "make it tiled");
        assert_eq!(body["stream"], false);
    }

    // Tests an empty generation is malformed
    // Verified by accepting blank text
    #[test]
    fn test_generate_empty_response() {
        let (url, server) = serve(vec![(200, r#"{"response":"   "}"#)]);
        let result = client(&url).generate("x");
        assert!(matches!(result, Err(TextureError::MalformedResponse { .. })));
        server.join().unwrap();
    }

    // Tests non-success statuses surface as status errors
    // Verified by parsing the error body as a success
    #[test]
    fn test_http_error_status() {
        let (url, server) = serve(vec![(500, r#"{"error":"model not loaded"}"#)]);
        let result = client(&url).generate("x");
        assert!(matches!(
            result,
            Err(TextureError::AdvisoryStatus { status: 500, .. })
        ));
        server.join().unwrap();
    }

    // Tests an unreachable server is a transport error
    // Verified by returning empty capabilities on connection failure
    #[test]
    fn test_connection_refused() {
        let url = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}", listener.local_addr().unwrap())
        };
        let result = client(&url).list_capabilities();
        assert!(matches!(
            result,
            Err(TextureError::AdvisoryTransport { .. })
        ));
    }

    // Tests the probe timeout bounds a silent server
    // Verified by dropping the per-request timeout
    #[test]
    fn test_probe_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let server = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            thread::sleep(Duration::from_secs(2));
            drop(stream);
        });

        let config = AdvisoryConfig {
            probe_timeout: Duration::from_millis(200),
            ..AdvisoryConfig::new(url, "llama3.2")
        };
        let result = OllamaAdvisory::new(config).unwrap().list_capabilities();
        assert!(result.is_err_and(|e| e.is_advisory()));
        server.join().unwrap();
    }

    // Tests a trailing slash on the base URL is tolerated
    // Verified by concatenating without trimming
    #[test]
    fn test_trailing_slash_base_url() {
        let (url, server) = serve(vec![(200, r#"{"models":[{"name":"m"}]}"#)]);
        let advisory = client(&format!("{url}/"));
        assert!(advisory.list_capabilities().unwrap().is_usable());
        assert_eq!(server.join().unwrap()[0].0, "GET /api/tags HTTP/1.1");
    }
}
