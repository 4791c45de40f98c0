use crate::content::SearchRequest;
use crate::locale::Locale;
use crate::locale::catalog::CrawlPlan;
use crate::markdown::{code_list, escape_md_link, single_line};
use crate::search::engine::SearchReport;
use crate::translate::TranslationIndex;

const MAX_EXCERPT_CHARS: usize = 300;

pub fn format_report(report: &SearchReport, request: &SearchRequest) -> String {
    let mut output = format!(
        "# Content search: {}\n\n",
        single_line(&request.keywords().join(", "))
    );
    output.push_str(&format!("Locales: {}\n\n", locale_names(request.locales())));

    if report.fallback_only() {
        output.push_str(
            "> Note: the discovery backend was unavailable. Showing local fallback results only.\n\n",
        );
    }

    output.push_str("## Translated keywords\n\n");
    for (locale, terms) in &report.translated_keywords {
        output.push_str(&format!(
            "- **{}**: {}\n",
            locale.display_name(),
            code_list(terms)
        ));
    }
    output.push('\n');

    if report.records.is_empty() {
        output.push_str("No matching content found.\n");
        return output;
    }

    output.push_str(&format!("## Results ({})\n\n", report.records.len()));
    for (i, record) in report.records.iter().enumerate() {
        output.push_str(&format!(
            "### {}. [{}]({})\n\n",
            i + 1,
            escape_md_link(&single_line(&record.title)),
            escape_md_link(&record.url)
        ));
        output.push_str(&format!(
            "{} · {} · {}\n\n",
            record.kind.label(),
            record.locale.display_name(),
            record.publish_date
        ));
        if !record.excerpt.is_empty() {
            output.push_str(&truncate_chars(&single_line(&record.excerpt), MAX_EXCERPT_CHARS));
            output.push_str("\n\n");
        }
        if !record.tags.is_empty() {
            output.push_str(&format!("Tags: {}\n\n", record.tags.join(", ")));
        }
    }

    output
}

pub fn format_crawl_summary(plans: &[CrawlPlan]) -> String {
    let mut output = String::from("# Crawl plan\n\n");
    for plan in plans {
        output.push_str(&format!("## {} (`{}`)\n\n", plan.locale_name, plan.locale));
        for target in &plan.targets {
            output.push_str(&format!("- {}: {}\n", target.section.label(), target.url));
        }
        output.push('\n');
    }
    output
}

/// Expanded terms per locale, plus a preview of what the first keyword
/// translates to.
pub fn format_translations(
    index: &TranslationIndex,
    keywords: &[String],
    locales: &[Locale],
) -> String {
    let mut output = format!("# Translations: {}\n\n", single_line(&keywords.join(", ")));
    let terms = index.expand_for_locales(keywords, locales);
    let mut any_unknown = false;

    for locale in locales {
        output.push_str(&format!("## {}\n\n", locale.display_name()));
        output.push_str(&format!("Search terms: {}\n", code_list(&terms[locale])));

        if let Some(first) = keywords.first() {
            let variants = index.variants_only(first, locale);
            if variants.is_empty() {
                any_unknown = true;
                output.push_str(&format!("No known variants for \"{first}\".\n"));
            } else {
                output.push_str(&format!("\"{first}\" → {}\n", code_list(&variants)));
            }
        }
        output.push('\n');
    }

    if any_unknown {
        output.push_str(&format!(
            "Known keywords: {}\n",
            code_list(index.canonical_keys())
        ));
    }

    output
}

fn locale_names(locales: &[Locale]) -> String {
    locales
        .iter()
        .map(Locale::display_name)
        .collect::<Vec<_>>()
        .join(", ")
}

fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}
