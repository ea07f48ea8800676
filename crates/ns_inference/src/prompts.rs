//! Prompt templates sent to the language model.

use ns_core::SearchResult;

pub fn refine_query(topic: &str) -> String {
    format!(
        "Generate a refined and short news search query for the topic: \"{}\".\n\
         Return ONLY the search query.\n",
        topic
    )
}

pub fn select_articles(results: &[SearchResult]) -> String {
    let formatted: String = results
        .iter()
        .enumerate()
        .map(|(i, r)| format!("{}. Title: {}\nURL: {}\nSnippet: {}\n\n", i + 1, r.title, r.url, r.snippet))
        .collect();

    format!(
        "You are a news filtering agent.\n\
         Given the search results:\n\
         {}\n\
         Pick ONLY the 3–5 most relevant URLs.\n\
         Return only URLs, one per line.\n",
        formatted
    )
}

pub fn summarize_article(content: &str) -> String {
    format!(
        "You are a news summarization expert.\n\
         Summarize the following article in 3-4 sentences, capturing the key points.\n\
         Keep it concise, informative, and neutral.\n\
         \n\
         Article:\n\
         {}\n\
         \n\
         Summary:\n",
        content
    )
}

pub fn executive_summary(topic: &str, summaries: &[&str]) -> String {
    let numbered = summaries
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a professional news report generator.\n\
         Create a brief, cohesive executive summary of the following news summaries about \"{}\".\n\
         Make it flow naturally and highlight the most important points.\n\
         \n\
         Summaries:\n\
         {}\n\
         \n\
         Executive Summary:\n",
        topic, numbered
    )
}
