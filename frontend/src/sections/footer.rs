use chrono::Datelike;
use yew::prelude::*;

use crate::components::common::Logo;
use crate::content::BRAND;

const FOOTER_LINKS: [&str; 3] = ["Termos", "Privacidade", "Contato"];

fn copyright_line(year: i32) -> String {
    format!("© {} {}. Todos os direitos reservados.", year, BRAND)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <Logo />
                <div class="footer-meta">
                    <p>{copyright_line(year)}</p>
                    <div class="footer-links">
                        { for FOOTER_LINKS.iter().map(|label| html! { <a href="#">{*label}</a> }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    background: var(--surface);
                    border-top: 1px solid var(--border);
                    padding: 3rem 1.5rem;
                }

                .footer-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                }

                .footer-meta {
                    color: var(--text-muted);
                    font-size: 0.875rem;
                    text-align: center;
                }

                .footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 1rem;
                    margin-top: 0.5rem;
                }

                .footer-links a {
                    color: inherit;
                    text-decoration: none;
                }

                .footer-links a:hover {
                    color: var(--primary);
                }

                @media (min-width: 768px) {
                    .footer-content {
                        flex-direction: row;
                    }

                    .footer-meta {
                        text-align: right;
                    }

                    .footer-links {
                        justify-content: flex-end;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_brand() {
        assert_eq!(
            copyright_line(2024),
            "© 2024 BUUDLEADS. Todos os direitos reservados."
        );
    }
}
