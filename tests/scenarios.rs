use paper_checker::{similarity, CutMode, JiebaSegmenter, SimilarityEngine};

const ORIGINAL: &str = "今天是星期天，天气晴，今天晚上我要去看电影。";
const REWORDED: &str = "今天是周天，天气晴朗，我晚上要去看电影。";

#[test]
fn identical_chinese_text() {
    let score = similarity(ORIGINAL, ORIGINAL);
    assert!((score - 1.0).abs() < 0.01, "score = {score}");
}

#[test]
fn reworded_chinese_text() {
    let score = similarity(ORIGINAL, REWORDED);
    assert!((0.60..=0.80).contains(&score), "score = {score}");
}

#[test]
fn reworded_text_is_symmetric() {
    let engine = SimilarityEngine::new();
    let ab = engine.similarity(ORIGINAL, REWORDED);
    let ba = engine.similarity(REWORDED, ORIGINAL);
    assert!((ab - ba).abs() < 1e-12);
}

#[test]
fn no_shared_vocabulary() {
    let score = similarity("机器学习改变世界", "我喜欢吃苹果");
    assert!(score < 0.10, "score = {score}");
}

#[test]
fn empty_documents() {
    assert_eq!(similarity("", ""), 1.0);
    assert_eq!(similarity("", "测试文本"), 0.0);
    assert_eq!(similarity("测试文本", ""), 0.0);
}

#[test]
fn long_repeated_text() {
    let original = format!("{}独特内容", "重复".repeat(1000));
    let candidate = format!("{}不同内容", "重复".repeat(800));
    let score = similarity(&original, &candidate);
    // 共通の繰り返し語が支配的だが末尾が違うので 1.0 にはならない
    assert!(score >= 0.80 && score < 1.0, "score = {score}");
}

#[test]
fn report_counts_tokens() {
    let report = SimilarityEngine::new().report(ORIGINAL, ORIGINAL);
    assert!((report.score - 1.0).abs() < 1e-9);
    assert_eq!(report.original_tokens, report.candidate_tokens);
    assert_eq!(report.shared_terms, report.vocabulary_size);
}

#[test]
fn batch_over_chinese_candidates() {
    let engine = SimilarityEngine::with_segmenter(JiebaSegmenter::with_options(CutMode::Search, true));
    let candidates = [ORIGINAL, REWORDED, "", "我喜欢吃苹果"];
    let scores = engine.similarity_batch(ORIGINAL, &candidates);

    assert_eq!(scores.len(), 4);
    assert!((scores[0] - 1.0).abs() < 1e-9);
    assert!(scores[1] > 0.0 && scores[1] < 1.0);
    assert_eq!(scores[2], 0.0);
    for (candidate, score) in candidates.iter().zip(&scores) {
        assert_eq!(*score, engine.similarity(ORIGINAL, candidate));
    }
}

#[test]
fn partially_reordered_sentence() {
    let original = "机器学习是人工智能的一个分支，它使计算机能够在没有明确编程的情况下学习。";
    let candidate = "人工智能的分支之一是机器学习，它让计算机可以不用明确编程就能进行学习。";
    let score = similarity(original, candidate);
    // 語順の入れ替えと言い換えで約 0.68
    assert!((0.60..=0.75).contains(&score), "score = {score}");
}

#[test]
fn shared_punctuation_runs() {
    let original = "文本中包含各种特殊字符：!@#$%^&*()_+{}|:\"<>?`-=[]\\;',./";
    let candidate = "特殊字符测试：!@#$%^&*()_+{}|:\"<>?`-=[]\\;',./ 还有一些额外内容";
    let score = similarity(original, candidate);
    // 記号の token が大半を共有するので約 0.88
    assert!((0.80..=0.95).contains(&score), "score = {score}");
}
