use super::*;

#[test]
fn markdown_headings_and_lists_render_to_html() {
    let out = render_markdown_html("## Progress\n- squat up\n- bench flat");
    assert!(out.contains("<h2>Progress</h2>"));
    assert!(out.contains("<li>squat up</li>"));
}

#[test]
fn raw_html_in_model_output_is_dropped() {
    let out = render_markdown_html("safe <script>alert(1)</script> text");
    assert!(!out.contains("<script>"));
    assert!(out.contains("safe"));
}

#[test]
fn analysis_footer_combines_model_and_usage() {
    let usage = AnalysisUsage {
        prompt_tokens: 100,
        completion_tokens: 50,
        total_tokens: 150,
    };
    assert_eq!(
        analysis_footer(Some("gpt-4o"), Some(&usage)),
        "Generated by gpt-4o (150 tokens)"
    );
    assert_eq!(analysis_footer(Some("gpt-4o"), None), "Generated by gpt-4o");
    assert_eq!(analysis_footer(None, Some(&usage)), "150 tokens used");
    assert_eq!(analysis_footer(None, None), "");
}
