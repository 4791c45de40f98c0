use std::sync::LazyLock;

use chrono::NaiveDate;

use super::{ContentKind, ContentRecord};
use crate::locale::Locale;

struct Entry {
    id: &'static str,
    title: &'static str,
    kind: ContentKind,
    url: &'static str,
    locale: Locale,
    excerpt: &'static str,
    date: (i32, u32, u32),
    tags: &'static [&'static str],
}

impl Entry {
    fn to_record(&self) -> ContentRecord {
        let (y, m, d) = self.date;
        ContentRecord {
            id: self.id.to_string(),
            title: self.title.to_string(),
            kind: self.kind,
            url: self.url.to_string(),
            locale: self.locale.clone(),
            excerpt: self.excerpt.to_string(),
            publish_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN),
            tags: self.tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

static FALLBACK_CORPUS: LazyLock<Vec<ContentRecord>> =
    LazyLock::new(|| ENTRIES.iter().map(Entry::to_record).collect());

/// Local records searched alongside (or instead of) the discovery backend.
pub fn fallback_corpus() -> &'static [ContentRecord] {
    &FALLBACK_CORPUS
}

static ENTRIES: [Entry; 20] = [
    Entry {
        id: "1",
        title: "Digital Transformation: How E-Signatures Are Revolutionizing Business",
        kind: ContentKind::Blog,
        url: "https://www.docusign.com/blog/digital-transformation-esignatures",
        locale: Locale::EnUs,
        excerpt: "Discover how electronic signatures are accelerating digital transformation and improving workflow efficiency across industries.",
        date: (2024, 10, 15),
        tags: &["digital transformation", "e-signature", "workflow", "efficiency"],
    },
    Entry {
        id: "2",
        title: "Customer Success Story: Salesforce Streamlines Contract Management",
        kind: ContentKind::CustomerStory,
        url: "https://www.docusign.com/customer-stories/salesforce",
        locale: Locale::EnUs,
        excerpt: "Learn how Salesforce uses Docusign to automate contract workflows and reduce signing time by 80%.",
        date: (2024, 9, 20),
        tags: &["contract management", "automation", "salesforce", "customer story"],
    },
    Entry {
        id: "3",
        title: "The Future of Agreement Technology in Healthcare",
        kind: ContentKind::Blog,
        url: "https://www.docusign.com/blog/healthcare-agreement-technology",
        locale: Locale::EnUs,
        excerpt: "Healthcare organizations are leveraging agreement technology to improve patient experience and operational efficiency.",
        date: (2024, 10, 1),
        tags: &["healthcare", "agreement technology", "patient experience", "compliance"],
    },
    Entry {
        id: "4",
        title: "Digitale Transformation: Wie E-Signaturen Geschäftsprozesse Revolutionieren",
        kind: ContentKind::Blog,
        url: "https://www.docusign.com/de-de/blog/digitale-transformation-e-signaturen",
        locale: Locale::DeDe,
        excerpt: "Erfahren Sie, wie elektronische Signaturen die digitale Transformation beschleunigen und die Workflow-Effizienz in allen Branchen verbessern.",
        date: (2024, 10, 10),
        tags: &["digitale transformation", "e-signatur", "workflow", "effizienz"],
    },
    Entry {
        id: "5",
        title: "Kundenerfolg: BMW Optimiert Vertragsmanagement",
        kind: ContentKind::CustomerStory,
        url: "https://www.docusign.com/de-de/customer-stories/bmw",
        locale: Locale::DeDe,
        excerpt: "BMW nutzt Docusign zur Automatisierung von Vertragsworkflows und reduziert die Bearbeitungszeit um 75%.",
        date: (2024, 9, 15),
        tags: &["vertragsmanagement", "automatisierung", "automotive", "kundenerfolg"],
    },
    Entry {
        id: "6",
        title: "Digitale Transformatie: E-Handtekeningen in de Praktijk",
        kind: ContentKind::Blog,
        url: "https://www.docusign.com/nl-nl/blog/digitale-transformatie-e-handtekeningen",
        locale: Locale::NlNl,
        excerpt: "Ontdek hoe elektronische handtekeningen digitale transformatie versnellen en de workflow-efficiëntie verbeteren.",
        date: (2024, 9, 28),
        tags: &["digitale transformatie", "e-handtekening", "workflow", "efficiëntie"],
    },
    Entry {
        id: "7",
        title: "Klantverhaal: ING Bank Stroomlijnt Documentbeheer",
        kind: ContentKind::CustomerStory,
        url: "https://www.docusign.com/nl-nl/customer-stories/ing",
        locale: Locale::NlNl,
        excerpt: "ING Bank gebruikt Docusign om documentworkflows te automatiseren en de ondertekeningsduur met 70% te verkorten.",
        date: (2024, 9, 5),
        tags: &["documentbeheer", "banking", "automatisering", "klantverhaal"],
    },
    Entry {
        id: "8",
        title: "Transformation Numérique: Les Signatures Électroniques au Service des Entreprises",
        kind: ContentKind::Blog,
        url: "https://www.docusign.com/fr-fr/blog/transformation-numerique",
        locale: Locale::FrFr,
        excerpt: "Découvrez comment les signatures électroniques accélèrent la transformation numérique et améliorent l'efficacité des workflows.",
        date: (2024, 10, 5),
        tags: &["transformation numérique", "signature électronique", "workflow", "efficacité"],
    },
    Entry {
        id: "9",
        title: "Témoignage Client: Renault Optimise la Gestion des Contrats",
        kind: ContentKind::CustomerStory,
        url: "https://www.docusign.com/fr-fr/customer-stories/renault",
        locale: Locale::FrFr,
        excerpt: "Renault utilise Docusign pour automatiser les workflows de contrats et réduire les délais de signature de 80%.",
        date: (2024, 8, 22),
        tags: &["gestion des contrats", "automatisation", "automotive", "témoignage"],
    },
    Entry {
        id: "10",
        title: "Transformación Digital: Firmas Electrónicas en el Mundo Empresarial",
        kind: ContentKind::Blog,
        url: "https://www.docusign.com/es-es/blog/transformacion-digital",
        locale: Locale::EsEs,
        excerpt: "Descubra cómo las firmas electrónicas aceleran la transformación digital y mejoran la eficiencia del flujo de trabajo.",
        date: (2024, 9, 30),
        tags: &["transformación digital", "firma electrónica", "flujo de trabajo", "eficiencia"],
    },
    Entry {
        id: "11",
        title: "Historia de Éxito: Telefónica Agiliza la Gestión de Contratos",
        kind: ContentKind::CustomerStory,
        url: "https://www.docusign.com/es-es/customer-stories/telefonica",
        locale: Locale::EsEs,
        excerpt: "Telefónica utiliza Docusign para automatizar los flujos de trabajo de contratos y reducir los tiempos de firma en un 85%.",
        date: (2024, 8, 15),
        tags: &["gestión de contratos", "automatización", "telecomunicaciones", "caso de éxito"],
    },
    Entry {
        id: "12",
        title: "Contract Lifecycle Management Best Practices for 2024",
        kind: ContentKind::Blog,
        url: "https://www.docusign.com/blog/clm-best-practices-2024",
        locale: Locale::EnUs,
        excerpt: "Explore the latest best practices in contract lifecycle management to optimize your agreement workflows.",
        date: (2024, 10, 20),
        tags: &["contract management", "CLM", "best practices", "workflow optimization"],
    },
    Entry {
        id: "13",
        title: "Real Estate Industry Transforms with Digital Agreements",
        kind: ContentKind::Blog,
        url: "https://www.docusign.com/blog/real-estate-digital-agreements",
        locale: Locale::EnUs,
        excerpt: "The real estate industry is embracing digital transformation with e-signatures and automated agreement workflows.",
        date: (2024, 9, 12),
        tags: &["real estate", "digital agreements", "automation", "industry trends"],
    },
    Entry {
        id: "14",
        title: "Customer Story: T-Mobile Accelerates Customer Onboarding",
        kind: ContentKind::CustomerStory,
        url: "https://www.docusign.com/customer-stories/tmobile",
        locale: Locale::EnUs,
        excerpt: "T-Mobile leverages Docusign to streamline customer onboarding and reduce paperwork by 90%.",
        date: (2024, 8, 30),
        tags: &["customer onboarding", "telecommunications", "automation", "customer experience"],
    },
    Entry {
        id: "15",
        title: "Trasformazione Digitale: Come le Firme Elettroniche Stanno Cambiando il Business",
        kind: ContentKind::Blog,
        url: "https://www.docusign.com/it-it/blog/trasformazione-digitale",
        locale: Locale::ItIt,
        excerpt: "Scopri come le firme elettroniche accelerano la trasformazione digitale e migliorano l'efficienza dei flussi di lavoro.",
        date: (2024, 9, 25),
        tags: &["trasformazione digitale", "firma elettronica", "workflow", "efficienza"],
    },
    Entry {
        id: "16",
        title: "Storia di Successo: UniCredit Ottimizza la Gestione dei Contratti",
        kind: ContentKind::CustomerStory,
        url: "https://www.docusign.com/it-it/customer-stories/unicredit",
        locale: Locale::ItIt,
        excerpt: "UniCredit utilizza Docusign per automatizzare i flussi di lavoro dei contratti e ridurre i tempi di firma del 75%.",
        date: (2024, 8, 18),
        tags: &["gestione contratti", "banking", "automazione", "caso di successo"],
    },
    Entry {
        id: "17",
        title: "Transformação Digital: Assinaturas Eletrônicas Revolucionando Negócios",
        kind: ContentKind::Blog,
        url: "https://www.docusign.com/pt-br/blog/transformacao-digital",
        locale: Locale::PtBr,
        excerpt: "Descubra como as assinaturas eletrônicas aceleram a transformação digital e melhoram a eficiência do fluxo de trabalho.",
        date: (2024, 9, 18),
        tags: &["transformação digital", "assinatura eletrônica", "fluxo de trabalho", "eficiência"],
    },
    Entry {
        id: "18",
        title: "Case de Sucesso: Banco do Brasil Agiliza Gestão de Contratos",
        kind: ContentKind::CustomerStory,
        url: "https://www.docusign.com/pt-br/customer-stories/banco-do-brasil",
        locale: Locale::PtBr,
        excerpt: "Banco do Brasil usa Docusign para automatizar fluxos de trabalho de contratos e reduzir tempo de assinatura em 80%.",
        date: (2024, 8, 10),
        tags: &["gestão de contratos", "banking", "automação", "caso de sucesso"],
    },
    Entry {
        id: "19",
        title: "デジタルトランスフォーメーション：電子署名がビジネスを変革",
        kind: ContentKind::Blog,
        url: "https://www.docusign.com/ja-jp/blog/digital-transformation",
        locale: Locale::JaJp,
        excerpt: "電子署名がデジタルトランスフォーメーションを加速し、ワークフローの効率を向上させる方法をご紹介します。",
        date: (2024, 9, 22),
        tags: &["デジタルトランスフォーメーション", "電子署名", "ワークフロー", "効率化"],
    },
    Entry {
        id: "20",
        title: "導入事例：ソフトバンクが契約管理を効率化",
        kind: ContentKind::CustomerStory,
        url: "https://www.docusign.com/ja-jp/customer-stories/softbank",
        locale: Locale::JaJp,
        excerpt: "ソフトバンクはDocusignを活用して契約ワークフローを自動化し、署名時間を75%削減しました。",
        date: (2024, 8, 25),
        tags: &["契約管理", "通信業界", "自動化", "導入事例"],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::locale::catalog::{infer_content_kind, infer_locale_from_url};

    #[test]
    fn corpus_has_twenty_records() {
        assert_eq!(fallback_corpus().len(), 20);
    }

    #[test]
    fn every_date_is_valid() {
        for record in fallback_corpus() {
            assert_ne!(record.publish_date, NaiveDate::MIN, "record {}", record.id);
        }
    }

    #[test]
    fn urls_and_ids_are_unique() {
        let urls: HashSet<_> = fallback_corpus().iter().map(|r| &r.url).collect();
        let ids: HashSet<_> = fallback_corpus().iter().map(|r| &r.id).collect();
        assert_eq!(urls.len(), fallback_corpus().len());
        assert_eq!(ids.len(), fallback_corpus().len());
    }

    #[test]
    fn url_metadata_agrees_with_record_fields() {
        for record in fallback_corpus() {
            assert_eq!(infer_locale_from_url(&record.url), record.locale, "{}", record.url);
            assert_eq!(infer_content_kind(&record.url), record.kind, "{}", record.url);
        }
    }
}
