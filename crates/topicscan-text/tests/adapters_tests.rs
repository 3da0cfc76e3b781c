use topicscan_core::config::HeadingLevels;
use topicscan_core::traits::{MorphologyExpander, Researcher, Sanitizer, StructuralExtractor};
use topicscan_core::types::{Document, Locale, WordForms};
use topicscan_core::TopicError;
use topicscan_text::{BasicMorphology, BasicResearcher, FunctionWordLists, HtmlHeadingExtractor, HtmlSanitizer, TantivyWordTokenizer};

fn forms(words: &[&str]) -> WordForms { words.iter().map(|w| w.to_string()).collect() }

fn morphology() -> BasicMorphology<TantivyWordTokenizer, FunctionWordLists> {
    BasicMorphology::new(TantivyWordTokenizer::new(), FunctionWordLists::new())
}

#[test]
fn sanitizer_drops_scripts_styles_comments_and_inline_tags() {
    let raw = "<h2 class=\"t\">Cat <a href=\"/x\">care</a></h2><script>var h = '<h2>fake</h2>';</script>\
               <style>h2 { color: red }</style><!-- <h3>hidden</h3> --><p><strong>Body</strong></p>";
    let clean = HtmlSanitizer::new().strip_non_text_markup(raw);
    assert_eq!(clean, "<h2 class=\"t\">Cat  care </h2><p> Body </p>");
}

#[test]
fn sanitizer_keeps_words_apart_across_inline_tags() {
    let clean = HtmlSanitizer::new().strip_non_text_markup("<h2><span>Black</span><span>cat</span> breeds</h2>");
    let headings = HtmlHeadingExtractor::default().extract_top_level_headings(&clean);
    assert_eq!(headings.len(), 1);
    assert_eq!(headings[0].text, "Black cat breeds");
}

#[test]
fn sanitizer_is_idempotent() {
    let s = HtmlSanitizer::new();
    for raw in ["<h2>A <span>b</span></h2>", "<scr<b>ipt>alert(1)</script>tail", "<scr<!-- -->ipt>x</script>tail", "plain text", ""] {
        let once = s.strip_non_text_markup(raw);
        assert_eq!(s.strip_non_text_markup(&once), once, "input {raw:?}");
    }
}

#[test]
fn extractor_returns_configured_levels_in_order() {
    let html = "<h1>Title</h1><h2>First cat</h2><p>x</p><h4>Deep</h4><H3 id=\"a\">Second</H3><h2></h2>";
    let headings = HtmlHeadingExtractor::default().extract_top_level_headings(html);
    let texts: Vec<_> = headings.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(texts, vec!["First cat", "Second", ""]);
    assert_eq!(headings.iter().map(|h| h.level).collect::<Vec<_>>(), vec![2, 3, 2]);
    assert_eq!(headings.iter().map(|h| h.position).collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn extractor_level_range_is_configurable() {
    let html = "<h1>Title</h1><h2>Sub</h2><h4>Deep</h4>";
    let all = HtmlHeadingExtractor::new(HeadingLevels::new(1, 6).unwrap()).extract_top_level_headings(html);
    assert_eq!(all.len(), 3);
    let only_h2 = HtmlHeadingExtractor::new(HeadingLevels::new(2, 2).unwrap()).extract_top_level_headings(html);
    assert_eq!(only_h2.len(), 1);
    assert_eq!(only_h2[0].text, "Sub");
}

#[test]
fn extractor_skips_mismatched_tags_and_handles_no_headings() {
    let e = HtmlHeadingExtractor::default();
    assert!(e.extract_top_level_headings("<h2>broken</h3>").is_empty());
    assert!(e.extract_top_level_headings("<p>No headings here.</p>").is_empty());
}

#[test]
fn extractor_recovers_after_an_unclosed_heading() {
    let e = HtmlHeadingExtractor::default();
    let headings = e.extract_top_level_headings("<h2>Intro<p>x</p><h3>Black cat</h3>");
    assert_eq!(headings.len(), 1);
    assert_eq!((headings[0].position, headings[0].level, headings[0].text.as_str()), (0, 3, "Black cat"));

    let mixed = e.extract_top_level_headings("<h3>Early</h3><h2>Later <h3>inside</h3> end</h2><h3>Last</h3>");
    let texts: Vec<_> = mixed.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(texts, vec!["Early", "Later inside end", "inside", "Last"]);
    assert_eq!(mixed.iter().map(|h| h.position).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
}

#[test]
fn extractor_does_not_match_longer_tag_names() {
    let html = "<h2x>not a heading</h2x><h2>Real</h2>";
    let headings = HtmlHeadingExtractor::default().extract_top_level_headings(html);
    assert_eq!(headings.iter().map(|h| h.text.as_str()).collect::<Vec<_>>(), vec!["Real"]);
}

#[test]
fn morphology_filters_function_words_when_a_list_exists() {
    let set = morphology().expand("The black cat", &[], &Locale::default()).expect("expand");
    assert_eq!(set.keyphrase_forms(), &[forms(&["black", "blacks"]), forms(&["cat", "cats"])]);
    assert_eq!(set.base(), "The black cat");
}

#[test]
fn morphology_does_not_invent_singulars() {
    let set = morphology().expand("news bus", &[], &Locale::default()).expect("expand");
    assert_eq!(set.keyphrase_forms(), &[forms(&["news"]), forms(&["bus", "buses"])]);
}

#[test]
fn morphology_keeps_all_words_without_a_list() {
    let it: Locale = "it_IT".parse().unwrap();
    let set = morphology().expand("il gatto nero", &[], &it).expect("expand");
    assert_eq!(set.keyphrase_forms(), &[forms(&["il"]), forms(&["gatto"]), forms(&["nero"])]);
}

#[test]
fn morphology_keeps_function_words_if_nothing_else_remains() {
    let set = morphology().expand("To be or not", &[], &Locale::default()).expect("expand");
    assert_eq!(set.keyphrase_forms().len(), 4);
}

#[test]
fn morphology_expands_synonyms() {
    let set = morphology().expand("cat", &["feline", "house kitty"], &Locale::default()).expect("expand");
    assert_eq!(set.synonyms_forms().len(), 2);
    assert_eq!(set.synonyms_forms()[1].len(), 2);
    assert!(set.forms().contains("felines"));
}

#[test]
fn morphology_rejects_unsupported_locale() {
    let ja: Locale = "ja_JP".parse().unwrap();
    let err = morphology().expand("猫", &[], &ja).unwrap_err();
    assert_eq!(err, TopicError::UnsupportedLocale("ja_JP".to_string()));
}

#[test]
fn researcher_reads_keyphrase_and_synonyms_from_document() {
    let researcher = BasicResearcher::default();
    let doc = Document::new("", "cat", Locale::default()).with_synonyms("feline");
    let set = researcher.morphology(&doc).expect("morphology");
    assert_eq!(set.keyphrase_forms().len(), 1);
    assert_eq!(set.synonyms_forms().len(), 1);
    assert!(researcher.has_function_words(&Locale::default()));
    assert!(!researcher.has_function_words(&"pt_BR".parse().unwrap()));
    assert!(!BasicResearcher::new(FunctionWordLists::none()).has_function_words(&Locale::default()));
}
