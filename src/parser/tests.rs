//! Tests for the HTTP parser.

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Arc;

    use crate::app::User;
    use crate::parser::{
        read_request, read_request_with_limit, Error, Headers, HttpRequest, Method, RequestLine,
        DEFAULT_MAX_BODY_SIZE,
    };
    use crate::session::{Attribute, Session};

    async fn parse(raw: &[u8]) -> Result<Option<HttpRequest>, Error> {
        let mut reader = raw;
        read_request(&mut reader).await
    }

    #[test]
    fn test_request_line_split() {
        let line = RequestLine::from_str("GET /index.html HTTP/1.1").unwrap();
        assert_eq!(line.method, Method::GET);
        assert_eq!(line.path, "/index.html");
        assert_eq!(line.version, "HTTP/1.1");
    }

    #[test]
    fn test_request_line_keeps_query_in_path() {
        let line = RequestLine::from_str("GET /login?account=gugu&password=password HTTP/1.1").unwrap();
        assert_eq!(line.path, "/login?account=gugu&password=password");
    }

    #[test]
    fn test_request_line_without_version() {
        let line = RequestLine::from_str("POST /login").unwrap();
        assert_eq!(line.method, Method::POST);
        assert_eq!(line.path, "/login");
        assert_eq!(line.version, "");
    }

    #[test]
    fn test_request_line_with_single_token() {
        let result = RequestLine::from_str("GET");
        assert!(matches!(result, Err(Error::MalformedRequestLine(ref l)) if l == "GET"));
    }

    #[test]
    fn test_request_line_with_empty_path() {
        let result = RequestLine::from_str("GET  HTTP/1.1");
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[test]
    fn test_invalid_method() {
        let result = RequestLine::from_str("BREW /pot HTTP/1.1");
        assert!(matches!(result, Err(Error::InvalidMethod(ref m)) if m == "BREW"));
    }

    #[tokio::test]
    async fn test_parse_simple_get_request() {
        let request = parse(b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.path(), "/index.html");
        assert_eq!(request.header("host"), Some("example.com"));
        assert!(request.body.is_empty());
        assert!(request.session.is_none());
    }

    #[tokio::test]
    async fn test_empty_stream_is_no_request() {
        let result = parse(b"").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_malformed_first_line() {
        let result = parse(b"GET\r\nHost: example.com\r\n\r\n").await;
        assert!(matches!(result, Err(Error::MalformedRequestLine(_))));
    }

    #[tokio::test]
    async fn test_header_names_are_lowercased() {
        let request = parse(b"GET / HTTP/1.1\r\nContent-Type: text/html\r\nX-Custom-Header: yes\r\n\r\n")
            .await
            .unwrap()
            .unwrap();
        let names: Vec<&str> = request.headers.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["content-type", "x-custom-header"]);
        assert_eq!(request.header("Content-Type"), Some("text/html"));
        assert_eq!(request.header("CONTENT-TYPE"), Some("text/html"));
    }

    #[tokio::test]
    async fn test_header_without_separator_is_skipped() {
        let request = parse(b"GET / HTTP/1.1\r\nInvalidHeader\r\nHost: localhost\r\n\r\n")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("host"), Some("localhost"));
    }

    #[tokio::test]
    async fn test_duplicate_header_last_wins() {
        let request = parse(b"GET / HTTP/1.1\r\nAccept: text/html\r\naccept: */*\r\n\r\n")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(request.headers.len(), 1);
        assert_eq!(request.header("accept"), Some("*/*"));
    }

    #[tokio::test]
    async fn test_lf_only_line_endings() {
        let request = parse(b"GET /a HTTP/1.1\nHost: localhost\n\n")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(request.path(), "/a");
        assert_eq!(request.header("host"), Some("localhost"));
    }

    #[tokio::test]
    async fn test_get_query_params() {
        let request = parse(b"GET /login?account=gugu&password=pass%20word HTTP/1.1\r\n\r\n")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(request.path(), "/login");
        assert_eq!(request.target(), "/login?account=gugu&password=pass%20word");
        assert_eq!(request.param("account"), Some("gugu"));
        assert_eq!(request.param("password"), Some("pass word"));
    }

    #[tokio::test]
    async fn test_post_form_body() {
        let raw = b"POST /login HTTP/1.1\r\nContent-Length: 38\r\nContent-Type: application/x-www-form-urlencoded\r\n\r\naccount=gugu&password=password&x=a%2Bb";
        let request = parse(raw).await.unwrap().unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.body.len(), 38);
        assert_eq!(request.param("account"), Some("gugu"));
        assert_eq!(request.param("password"), Some("password"));
        assert_eq!(request.param("x"), Some("a+b"));
    }

    #[tokio::test]
    async fn test_post_body_reads_exactly_content_length() {
        let raw = b"POST /login HTTP/1.1\r\nContent-Length: 12\r\n\r\naccount=gugu&password=password";
        let request = parse(raw).await.unwrap().unwrap();
        assert_eq!(request.body, b"account=gugu".to_vec());
        assert_eq!(request.param("account"), Some("gugu"));
        assert!(request.param("password").is_none());
    }

    #[tokio::test]
    async fn test_post_body_shorter_than_content_length() {
        let raw = b"POST /login HTTP/1.1\r\nContent-Length: 100\r\n\r\naccount=gugu";
        let result = parse(raw).await;
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[tokio::test]
    async fn test_invalid_content_length() {
        let raw = b"POST /login HTTP/1.1\r\nContent-Length: lots\r\n\r\n";
        let result = parse(raw).await;
        assert!(matches!(result, Err(Error::InvalidContentLength(ref v)) if v == "lots"));
    }

    #[tokio::test]
    async fn test_get_ignores_body() {
        let raw = b"GET /index.html HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello";
        let request = parse(raw).await.unwrap().unwrap();
        assert!(request.body.is_empty());
    }

    #[tokio::test]
    async fn test_session_id_from_cookie() {
        let raw = b"GET /login HTTP/1.1\r\nCookie: yummy_cookie=choco; JSESSIONID=656cef62-e3c4-40bc-a8df-94732920ed46; tasty=1\r\n\r\n";
        let request = parse(raw).await.unwrap().unwrap();
        assert_eq!(
            request.session_id(),
            Some("656cef62-e3c4-40bc-a8df-94732920ed46")
        );
    }

    #[tokio::test]
    async fn test_session_id_absent() {
        let without_cookie = parse(b"GET / HTTP/1.1\r\n\r\n").await.unwrap().unwrap();
        assert!(without_cookie.session_id().is_none());

        let other_cookie = parse(b"GET / HTTP/1.1\r\nCookie: theme=dark\r\n\r\n")
            .await
            .unwrap()
            .unwrap();
        assert!(other_cookie.session_id().is_none());
    }

    #[test]
    fn test_user_from_resolved_session() {
        let line = RequestLine::from_str("GET /login HTTP/1.1").unwrap();
        let mut request = HttpRequest::new(line, Headers::new());
        assert!(request.session().is_none());

        let user = User::new(1, "gugu", "password", "hkkang@woowahan.com");
        let mut session = Session::new("abc");
        session.set_attribute("user", Attribute::User(user.clone()));
        request.session = Some(Arc::new(session));

        assert_eq!(request.session().and_then(Session::user), Some(&user));
    }

    #[tokio::test]
    async fn test_huge_content_length_is_rejected() {
        let raw = b"POST /login HTTP/1.1\r\nContent-Length: 9000000000000000\r\n\r\nx";
        let result = parse(raw).await;
        assert!(matches!(
            result,
            Err(Error::BodyTooLarge(9_000_000_000_000_000, limit)) if limit == DEFAULT_MAX_BODY_SIZE
        ));
    }

    #[tokio::test]
    async fn test_max_usize_content_length_is_rejected() {
        let raw = format!("POST /login HTTP/1.1\r\nContent-Length: {}\r\n\r\nx", usize::MAX);
        let result = parse(raw.as_bytes()).await;
        assert!(matches!(result, Err(Error::BodyTooLarge(len, _)) if len == usize::MAX));
    }

    #[tokio::test]
    async fn test_body_limit() {
        let raw = b"POST /login HTTP/1.1\r\nContent-Length: 12\r\n\r\naccount=gugu";

        let mut at_limit: &[u8] = raw;
        let request = read_request_with_limit(&mut at_limit, 12).await.unwrap().unwrap();
        assert_eq!(request.param("account"), Some("gugu"));

        let mut over_limit: &[u8] = raw;
        let result = read_request_with_limit(&mut over_limit, 11).await;
        assert!(matches!(result, Err(Error::BodyTooLarge(12, 11))));
    }
}
