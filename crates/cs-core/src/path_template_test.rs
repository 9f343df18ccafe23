use super::*;

#[test]
fn test_named_param_normalized() {
    assert_eq!(normalize_path("/api/cv/:id"), "/api/cv/:param");
    assert_eq!(
        normalize_path("/api/users/:userId/posts/:post_id"),
        "/api/users/:param/posts/:param"
    );
}

#[test]
fn test_interpolation_normalized() {
    assert_eq!(normalize_path("/api/cv/${id}"), "/api/cv/:param");
    assert_eq!(
        normalize_path("/api/cv/${cv.id}/analyze"),
        "/api/cv/:param/analyze"
    );
}

#[test]
fn test_nested_interpolation_normalized() {
    assert_eq!(
        normalize_path("/api/items/${encode({ id })}"),
        "/api/items/:param"
    );
}

#[test]
fn test_brace_param_normalized() {
    assert_eq!(normalize_path("/api/cv/{id}"), "/api/cv/:param");
}

#[test]
fn test_uuid_segment_normalized() {
    assert_eq!(
        normalize_path("/api/cv/3f2b8c1e-9a4d-4e5f-8b6a-1c2d3e4f5a6b"),
        "/api/cv/:param"
    );
    // 36 characters but not UUID-shaped
    assert_eq!(
        normalize_path("/api/cv/abcdefabcdefabcdefabcdefabcdefabcdef"),
        "/api/cv/abcdefabcdefabcdefabcdefabcdefabcdef"
    );
}

#[test]
fn test_backend_and_frontend_forms_agree() {
    let backend = normalize_path("/api/cv/:id");
    let frontend = normalize_path("/api/cv/${id}");
    let literal = normalize_path("/api/cv/3f2b8c1e-9a4d-4e5f-8b6a-1c2d3e4f5a6b");
    assert_eq!(backend, frontend);
    assert_eq!(backend, literal);
}

#[test]
fn test_origin_stripped() {
    assert_eq!(
        normalize_path("https://example.com/api/cv/${id}"),
        "/api/cv/:param"
    );
    assert_eq!(normalize_path("http://localhost:3000/api/health"), "/api/health");
    assert_eq!(normalize_path("https://example.com"), "/");
}

#[test]
fn test_query_and_fragment_stripped() {
    assert_eq!(normalize_path("/api/cv?page=${page}"), "/api/cv");
    assert_eq!(normalize_path("/api/docs#section"), "/api/docs");
}

#[test]
fn test_trailing_slash_removed() {
    assert_eq!(normalize_path("/api/cv/"), "/api/cv");
    assert_eq!(normalize_path("/"), "/");
}

#[test]
fn test_mid_segment_interpolation_kept_in_segment() {
    assert_eq!(
        normalize_path("/api/files/report-${id}.pdf"),
        "/api/files/report-:param.pdf"
    );
}

#[test]
fn test_normalization_is_idempotent() {
    let inputs = [
        "/api/cv/:id",
        "/api/cv/${id}",
        "/api/cv/{id}/",
        "https://example.com/api/x/${a}${b}?q=1",
        "/api/files/report-${id}.pdf",
        "${API_BASE}/cv/${id}",
        "/api/cv/3f2b8c1e-9a4d-4e5f-8b6a-1c2d3e4f5a6b",
        "/api/unterminated/${id",
        "/api/x ?q=1",
        "/api/x #top",
        "/api/x/ ",
        "/api/x / /",
        "/api/cv/:id ?draft=1",
        "",
        "/",
        " / ",
    ];
    for input in inputs {
        let once = normalize_path(input);
        let twice = normalize_path(&once);
        assert_eq!(once, twice, "not idempotent for {input:?}");
        assert!(is_normalized(&once));
    }
}

#[test]
fn test_has_prefix_matches_whole_segments() {
    assert!(has_prefix("/api", "/api"));
    assert!(has_prefix("/api/cv", "/api"));
    assert!(has_prefix("/api/cv", "/api/"));
    assert!(!has_prefix("/apiary", "/api"));
    assert!(!has_prefix("/v1/api", "/api"));
}

#[test]
fn test_whitespace_before_query_or_trailing_slash_is_dropped() {
    assert_eq!(normalize_path("/api/x ?q=1"), "/api/x");
    assert_eq!(normalize_path("/api/x #top"), "/api/x");
    assert_eq!(normalize_path("/api/x / /"), "/api/x");
    assert_eq!(normalize_path("/api/cv/:id ?draft=1"), "/api/cv/:param");
    assert_eq!(normalize_path(" / "), "/");
}
