use yew::prelude::*;

use crate::components::common::SectionHeading;
use crate::components::icons::Icon;
use crate::content::DIFFERENTIATORS;

#[function_component(Differentiators)]
pub fn differentiators() -> Html {
    html! {
        <section class="differentiators">
            <div class="section-container">
                <SectionHeading title="Por que BUUDLEADS é diferente?" />

                <div class="differentiator-grid">
                    { for DIFFERENTIATORS.iter().map(|item| html! {
                        <div class="card differentiator-card">
                            <Icon kind={item.icon} size={48} class={classes!("text-primary")} />
                            <h3>{item.title}</h3>
                            <p>{item.description}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .differentiators {
                    padding: 6rem 1.5rem;
                    border-top: 1px solid var(--border-soft);
                    border-bottom: 1px solid var(--border-soft);
                    background: color-mix(in srgb, var(--surface) 20%, transparent);
                }

                .differentiator-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .differentiator-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                .differentiator-card h3 {
                    font-size: 1.25rem;
                    margin: 1.5rem 0 1rem;
                }

                .differentiator-card p {
                    color: var(--text-muted);
                }

                @media (min-width: 768px) {
                    .differentiator-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
