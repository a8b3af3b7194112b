use yew::prelude::*;

use crate::components::common::{Button, ButtonVariant, SectionHeading};
use crate::components::icons::{Icon, IconKind};
use crate::content::{PageSection, Plan, PLANS};

fn plan_card(plan: &Plan) -> Html {
    let variant = if plan.highlight {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    html! {
        <div class={classes!("plan-card", plan.highlight.then_some("plan-highlight"))}>
            if plan.highlight {
                <div class="plan-badge">{"Mais Popular"}</div>
            }

            <h3>{plan.name}</h3>
            <p class="plan-description">{plan.description}</p>

            <div class="plan-price">
                <span class="plan-amount">{format!("R${}", plan.price)}</span>
                <span class="plan-period">{"/mês"}</span>
            </div>

            <Button variant={variant} class={classes!("btn-block", "plan-cta")}>{"Começar Agora"}</Button>

            <ul class="plan-features">
                { for plan.features.iter().map(|feature| html! {
                    <li>
                        <Icon kind={IconKind::Check} size={20} class={classes!("text-primary")} />
                        <span>{*feature}</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id={PageSection::Pricing.anchor()} class="pricing">
            <div class="section-container">
                <SectionHeading title="Planos que crescem com você" />
                <div class="plan-grid">
                    { for PLANS.iter().map(plan_card) }
                </div>
            </div>

            <style>
                {r#"
                .pricing {
                    padding: 6rem 1.5rem;
                    background: color-mix(in srgb, var(--surface) 30%, transparent);
                }

                .plan-grid {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    align-items: start;
                }

                .plan-card {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    padding: 2rem;
                    border-radius: 1rem;
                    border: 1px solid var(--border);
                    background: color-mix(in srgb, var(--surface) 50%, transparent);
                    transition: transform 0.3s;
                }

                .plan-card:hover {
                    border-color: var(--border-strong);
                }

                .plan-highlight {
                    background: var(--surface);
                    border: 2px solid var(--primary);
                    box-shadow: 0 0 40px rgba(0, 191, 255, 0.15);
                    transform: scale(1.05);
                    z-index: 1;
                }

                .plan-badge {
                    position: absolute;
                    top: 0;
                    left: 50%;
                    transform: translate(-50%, -50%);
                    padding: 0.25rem 1rem;
                    border-radius: 9999px;
                    background: var(--primary);
                    color: var(--background);
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                }

                .plan-card h3 {
                    font-size: 1.5rem;
                    margin: 0;
                }

                .plan-description {
                    color: var(--text-muted);
                    font-size: 0.875rem;
                    min-height: 2.5rem;
                }

                .plan-price {
                    margin: 2rem 0;
                }

                .plan-amount {
                    font-size: 2.25rem;
                    font-weight: 900;
                }

                .plan-period {
                    color: var(--text-muted);
                }

                .plan-cta {
                    margin-bottom: 2rem;
                }

                .plan-features {
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .plan-features li {
                    display: flex;
                    align-items: flex-start;
                    gap: 0.75rem;
                    font-size: 0.875rem;
                    color: var(--text-muted);
                }

                @media (min-width: 1024px) {
                    .plan-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
