/// A ready-made search offered to new users.
#[derive(Debug)]
pub struct ExampleSearch {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
    pub locales: &'static [&'static str],
    pub description: &'static str,
}

pub const EXAMPLE_SEARCHES: &[ExampleSearch] = &[
    ExampleSearch {
        label: "Contract Automation",
        keywords: &["contract", "automation", "workflow"],
        locales: &["en_us", "de_de", "fr_fr"],
        description: "Find content about contract automation in English, German, and French",
    },
    ExampleSearch {
        label: "Healthcare Solutions",
        keywords: &["healthcare", "digital", "signature"],
        locales: &["en_us", "es_es", "pt_br"],
        description: "Healthcare-related content in English, Spanish, and Portuguese",
    },
    ExampleSearch {
        label: "Customer Success Stories",
        keywords: &["customer", "success", "transformation"],
        locales: &["en_us", "nl_nl", "it_it"],
        description: "Success stories in English, Dutch, and Italian",
    },
    ExampleSearch {
        label: "Banking & Financial",
        keywords: &["banking", "financial", "compliance"],
        locales: &["en_us", "de_de", "ja_jp"],
        description: "Banking solutions in English, German, and Japanese",
    },
];

pub fn format_examples() -> String {
    let mut output = String::from("# Example searches\n\n");
    for example in EXAMPLE_SEARCHES {
        output.push_str(&format!("## {}\n\n{}\n\n", example.label, example.description));
        let mut command = String::from("polyscout search");
        for keyword in example.keywords {
            command.push_str(&format!(" -k {keyword}"));
        }
        for locale in example.locales {
            command.push_str(&format!(" -l {locale}"));
        }
        output.push_str(&format!("```\n{command}\n```\n\n"));
    }
    output
}
