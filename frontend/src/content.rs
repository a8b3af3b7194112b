//! Authored page copy. Every list renders in the order it is written here.

use crate::components::icons::IconKind;

pub const BRAND: &str = "BUUDLEADS";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Benefits,
    Plans,
    Faq,
}

impl NavTarget {
    pub const ALL: [NavTarget; 3] = [NavTarget::Benefits, NavTarget::Plans, NavTarget::Faq];

    /// Id of the section element this link jumps to.
    pub fn anchor(self) -> &'static str {
        match self {
            NavTarget::Benefits => "benefits",
            NavTarget::Plans => "plans",
            NavTarget::Faq => "faq",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }

    pub fn label(self) -> &'static str {
        match self {
            NavTarget::Benefits => "Benefícios",
            NavTarget::Plans => "Planos",
            NavTarget::Faq => "FAQ",
        }
    }
}

/// Sections rendered inside `<main>`, top to bottom. The header sits above
/// and the footer below.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSection {
    Hero,
    Authority,
    Benefits,
    VisualDemo,
    Differentiators,
    Testimonials,
    Pricing,
    Faq,
    CallToAction,
}

impl PageSection {
    pub const ORDER: [PageSection; 9] = [
        PageSection::Hero,
        PageSection::Authority,
        PageSection::Benefits,
        PageSection::VisualDemo,
        PageSection::Differentiators,
        PageSection::Testimonials,
        PageSection::Pricing,
        PageSection::Faq,
        PageSection::CallToAction,
    ];

    pub fn anchor(self) -> Option<&'static str> {
        let target = match self {
            PageSection::Benefits => NavTarget::Benefits,
            PageSection::Pricing => NavTarget::Plans,
            PageSection::Faq => NavTarget::Faq,
            _ => return None,
        };
        Some(target.anchor())
    }
}

pub struct Feature {
    pub icon: IconKind,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub text: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub metric: &'static str,
    pub image: &'static str,
}

pub struct Plan {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub highlight: bool,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

/// Single-path wordmark drawn at a fixed height.
pub struct LogoMark {
    pub view_box: &'static str,
    pub path: &'static str,
}

pub const HERO_IMAGE: &str = "https://lh3.googleusercontent.com/aida-public/AB6AXuDCv3Kds512n0GnaAgxveSBr3Fht61YlqfaWYCpha7z-wiIqWUVwACazYhvYge-YOLpcl6l7NcqJL8MI9XntgRO5MNhwXVCb_n9eN0x7nskkI05GjV9YkFJNIBrqG7RqyEZWsxuL0cQuH5rY3IwsjIAlehCebmrr6OEWxTORCEZiAB0nv0FIPye47sYZU3c6d8O2YPLQ2QLMpGklMxeYKaMLmZLaqkcGNCRQC_rctGmvWiy0643Avkey6fzXk9sXxTYfW89Q8LBxMF6";

pub const DEMO_IMAGE: &str = "https://lh3.googleusercontent.com/aida-public/AB6AXuBfijBFTkit1vp0GNVcBCWTW7MrZRBpKkCHvmynogWBt6wL2LGZd_KRXW7vczC-0p4GPMQCT2uFM3Nc8nLtboUpJyKzrmMLNcTS0hduolqWfsWPycfT4idvSuk0kGAeUFUn2mUSvHngeNmGXeGWa8qAN09LZHnQ0QtaHVz1Rid4miB_00WOjhDaQH396TO_L_ZB2cfEIGOLbu4GmXWKS_Q4I9o7hOI-9KYk8_WCBHUZbTicFPPk9IOxyz29oWEOB1-OXK3qW4-ZhaG-";

pub const AUTHORITY_LOGOS: &[LogoMark] = &[
    LogoMark {
        view_box: "0 0 114 32",
        path: "M113.88 16.03a15.84 15.84 0 0 0-15.81-15.81c-8.75 0-15.81 7.07-15.81 15.81s7.07 15.81 15.8 15.81c8.75 0 15.82-7.07 15.82-15.81Zm-15.81 12.02c-6.72 0-12.16-5.4-12.16-12.02S91.35 4 98.07 4c6.72 0 12.16 5.4 12.16 12.03s-5.44 12.02-12.16 12.02Z M71.02 31.57V.5h3.65v31.07h-3.65ZM50.91 31.57 39.46 16.03 50.78.5h4.1l-9.84 13.63L55.1 31.57h-4.2Z M21.04 31.57V.5h14.82v3.65H24.7v8.9h10.4v3.65h-10.4v11.22h11.52v3.65H21.04ZM0 31.57V.5h3.65v31.07H0Z",
    },
    LogoMark {
        view_box: "0 0 102 32",
        path: "M102 16.03c0-8.74-7.07-15.8-15.8-15.8a15.82 15.82 0 0 0-15.82 15.8c0 8.74 7.07 15.81 15.81 15.81 8.75 0 15.81-7.07 15.81-15.81Zm-15.81 12.02c-6.72 0-12.16-5.4-12.16-12.02S79.47 4 86.19 4s12.16 5.4 12.16 12.03-5.44 12.02-12.16 12.02Z M53.81 31.57V.5h3.65v31.07h-3.65Z M25.13 31.57V.5h14.45c9.2 0 14.28 5.7 14.28 15.53S48.78 31.57 39.58 31.57H25.13Zm3.65-3.65h10.8c7.1 0 10.63-4.26 10.63-11.88 0-7.62-3.53-11.88-10.63-11.88h-10.8v23.76Z M0 31.57V.5h12.16l8.83 15.54V.5h3.65v31.07H21L12.16 16.03v15.54H0Z",
    },
    LogoMark {
        view_box: "0 0 101 32",
        path: "M100.32 31.57V.5h-3.65v11.8L83.18.5h-4.57L91.9 13.15 78.48 31.57h4.57l9.6-13.89v13.89h3.67ZM59.94 31.57V.5h14.82v3.65h-11.17v8.9h10.4v3.65h-10.4v11.22h11.52v3.65H59.94Z M39.98 31.57V.5H52.1l8.84 15.54V.5h3.64v31.07H51L42.14 16.03v15.54h-2.16Z M18.17 28.02c-6.72 0-12.16-5.4-12.16-12s5.44-12.02 12.16-12.02c3.48 0 6.64 1.45 8.87 3.82l-2.5 2.68a8.31 8.31 0 0 0-6.37-2.68c-4.7 0-8.5 3.78-8.5 8.42s3.8 8.42 8.5 8.42c2.8 0 5.25-1.3 6.84-3.4h-6.73v-3.65h12.05c.1.58.15 1.18.15 1.88 0 7.42-4.9 12.55-12.2 12.55Z",
    },
    LogoMark {
        view_box: "0 0 103 32",
        path: "M64.71 19.38 60.2 31.57h-3.93l12.42-31.07h2.2l12.42 31.07h-3.92l-4.52-12.2h-10.16Zm8.58-3.65c-1-2.72-2-5.7-2.8-8.2-.8 2.5-1.8 5.48-2.8 8.2h5.6Z M43.43 31.57V.5h3.65v31.07h-3.65Z M21.72 31.57V.5h14.44c9.2 0 14.28 5.7 14.28 15.53S45.36 31.57 36.16 31.57H21.72Zm3.65-3.65h10.8c7.1 0 10.63-4.26 10.63-11.88 0-7.62-3.54-11.88-10.64-11.88h-10.8v23.76ZM2.16 31.57 13.6.5h4.1L7.86 31.57H2.16Z",
    },
];

pub const FEATURES: &[Feature] = &[
    Feature {
        icon: IconKind::Cpu,
        title: "Automação que trabalha por você",
        description: "Nutrição, follow-ups, pipelines inteligentes que rodam 24/7 sem pausa.",
    },
    Feature {
        icon: IconKind::Filter,
        title: "Funis prontos para conversão B2B",
        description: "Lógica estratégica validada que economiza meses de configuração operacional.",
    },
    Feature {
        icon: IconKind::Users,
        title: "Segmentação avançada",
        description: "Envia a mensagem certa para a pessoa certa, sempre, baseada em comportamento.",
    },
    Feature {
        icon: IconKind::Layout,
        title: "Gestão de leads sem bagunça",
        description: "Pipeline visual kanban, claro e fácil de arrastar e soltar.",
    },
    Feature {
        icon: IconKind::Zap,
        title: "Integrações sem sofrimento",
        description: "WhatsApp, formulários, websites, e-mail marketing, tudo conectado nativamente.",
    },
    Feature {
        icon: IconKind::BarChart,
        title: "Relatórios de ROI Real",
        description: "Nada de métricas de vaidade. Saiba exatamente quanto dinheiro está na mesa.",
    },
];

pub const DIFFERENTIATORS: &[Feature] = &[
    Feature {
        icon: IconKind::Award,
        title: "Tecnologia de elite, sem preço de elite",
        description: "Mesma qualidade dos gigantes globais de CRM, mas com um custo acessível para o mercado nacional.",
    },
    Feature {
        icon: IconKind::PieChart,
        title: "Estratégia + Ferramenta",
        description: "Você não compra só software. Você adquire inteligência operacional embutida na plataforma.",
    },
    Feature {
        icon: IconKind::Headphones,
        title: "Suporte humano que fala sua língua",
        description: "Nada de ticket frio ou robô mudo. Gente cuidando de gente para o seu negócio não parar.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        text: "A automação de funis mudou nosso jogo. Conseguimos escalar o contato sem perder a personalização. Essencial para qualquer agência.",
        author: "Carlos Silva",
        role: "CEO, Agência Digital",
        metric: "Crescimento de 40% em leads",
        image: "https://lh3.googleusercontent.com/aida-public/AB6AXuDnt1NweKEmmOLh3AZlKE8x-v9lqnrf_w3uzCc2PsoyE--yewYak-fCrzKBVEMGzZscFlazvFeDU42qTWU5bRDlAr2-xKFmazHDPcWZAi82fTcIqfdd3JLzf4rr8bD6lpAosQMqzJKX7yUw6n2hWl7Y9ncBesHpwdZ13YVtMRdT6NXFyVjDASle_OuKge3pkLxjG5rPUR5faTGLywADxoWLj5dDczNHXX8sLpOY0FXHcg11yoyRueaL9Rby0-7LBuNbL9ZO-jyVRaVD",
    },
    Testimonial {
        text: "Finalmente um pipeline que toda a equipe entende e usa. A visibilidade que ganhamos sobre o negócio é incrível.",
        author: "Juliana Martins",
        role: "Diretora, Consultoria B2B",
        metric: "Redução de 25% no ciclo de vendas",
        image: "https://lh3.googleusercontent.com/aida-public/AB6AXuC_DcrWXPtSN2MH1rhpGIxBGJpQcs2f5B_e7B470LRzA3MZoFQs8AIG5LiL1Bhn4Y-baJgcLygd4yS2p4-2JvL59biKzNOcfHw4m1cXM3zOr32Tmi_tW7uyjZdjdu2A4eGm7z-p-jwCyB9yAyWj_jt-9WXQE3xmoaCg8fbeZQ_gfYnlDDWmrTErXbOTHThsEv4M2NnGdxaeX1lvIyoRauaviSAv7sCXZb4-6La1-0LdrEWBpPhWIMsfYf-UF7bQQ8r7WmJ6LpGbVpy7",
    },
    Testimonial {
        text: "A integração com WhatsApp foi um divisor de águas. O contato com o cliente ficou muito mais rápido e eficiente.",
        author: "Rafael Souza",
        role: "Sócio, Serviços de TI",
        metric: "Aumento de 60% na taxa de resposta",
        image: "https://lh3.googleusercontent.com/aida-public/AB6AXuCJPtcEMH72Ce3iJvk-3V9eiH_e5Vi0TP3GOjjwFS4eRkgHadi4ry5oGnmyVo5vrEVfKLNfh5_Vc9e2oUCYBWRuUrn_X2JKOii1rjFFBkC2GSHf5PuUdb0tvHfma5jEPSLPlYcnRumxV7266C8I6ZWYl1jJRTRWaK9M7FMG6HuunNee0MIFpLMBXuoN_ljJoeJVTUbnv4TdtMfRsUGm0x2rRlyHNUnscEzP8rFsYz0H7lOm8HFbJWNXQskcDu9UKBK1fO4_BkpZd1pm",
    },
];

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        description: "Para quem está começando a organizar o processo.",
        price: "199",
        features: &[
            "Até 2 usuários",
            "Pipeline de Vendas Visual",
            "Gestão de Contatos Ilimitada",
            "E-mail Básico",
        ],
        highlight: false,
    },
    Plan {
        name: "Growth",
        description: "Para empresas que buscam escalar com automação.",
        price: "499",
        features: &[
            "Tudo do Starter, mais:",
            "Automação de Marketing",
            "Segmentação Avançada",
            "Integração WhatsApp Oficial",
            "5 Usuários inclusos",
        ],
        highlight: true,
    },
    Plan {
        name: "Scale",
        description: "Para operações que precisam de dados e performance.",
        price: "999",
        features: &[
            "Tudo do Growth, mais:",
            "Relatórios Avançados (BI)",
            "Suporte Prioritário VIP",
            "API e Webhooks Ilimitados",
            "Usuários Ilimitados",
        ],
        highlight: false,
    },
];

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "Preciso ter experiência com CRM?",
        answer: "Não. A plataforma é projetada para ser intuitiva. Além disso, nosso suporte e os materiais de ajuda guiam você em cada passo da configuração.",
    },
    FaqEntry {
        question: "Em quanto tempo consigo colocar no ar?",
        answer: "Com nossos modelos de funis e automações, você pode ter sua operação rodando em questão de dias, não meses. A importação de dados é simples e rápida.",
    },
    FaqEntry {
        question: "Funis e automações já vêm prontos?",
        answer: "Sim, oferecemos uma biblioteca de modelos prontos para B2B que você pode ativar com poucos cliques e adaptar para sua necessidade específica.",
    },
    FaqEntry {
        question: "O WhatsApp integra?",
        answer: "Sim! Nossa integração oficial permite enviar e receber mensagens, além de automatizar conversas diretamente pela plataforma (disponível nos planos Growth e Scale).",
    },
    FaqEntry {
        question: "Como funciona o suporte?",
        answer: "Nosso suporte é feito por humanos especialistas, em português, via chat e e-mail. Acreditamos em resolver problemas de verdade, não em abrir tickets infinitos.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_one_plan_is_highlighted() {
        assert_eq!(PLANS.iter().filter(|p| p.highlight).count(), 1);
        assert_eq!(PLANS.iter().map(|p| p.name).collect::<Vec<_>>(), ["Starter", "Growth", "Scale"]);
    }

    #[test]
    fn every_nav_target_has_a_section() {
        for target in NavTarget::ALL {
            let sections = PageSection::ORDER
                .iter()
                .filter(|s| s.anchor() == Some(target.anchor()))
                .count();
            assert_eq!(sections, 1, "{:?}", target);
        }
    }

    #[test]
    fn sections_keep_page_order() {
        let anchored: Vec<_> = PageSection::ORDER.iter().filter_map(|s| s.anchor()).collect();
        assert_eq!(anchored, ["benefits", "plans", "faq"]);
        assert_eq!(PageSection::ORDER.first(), Some(&PageSection::Hero));
        assert_eq!(PageSection::ORDER.last(), Some(&PageSection::CallToAction));
    }

    #[test]
    fn nav_hrefs_point_at_anchors() {
        assert_eq!(NavTarget::Plans.href(), "#plans");
        assert_eq!(NavTarget::ALL.map(NavTarget::label), ["Benefícios", "Planos", "FAQ"]);
    }

    #[test]
    fn faq_list_is_non_empty() {
        assert_eq!(FAQ_ENTRIES.len(), 5);
        assert!(FAQ_ENTRIES.iter().all(|e| !e.question.is_empty() && !e.answer.is_empty()));
    }
}
