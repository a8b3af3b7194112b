use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::content::{Testimonial, TESTIMONIALS};

const STAR_COUNT: usize = 5;

fn testimonial_card(testimonial: &Testimonial) -> Html {
    html! {
        <div class="card testimonial-card">
            <div>
                <div class="stars">
                    { for (0..STAR_COUNT).map(|_| html! {
                        <Icon kind={IconKind::Star} size={16} filled={true} class={classes!("text-primary")} />
                    }) }
                </div>
                <p class="testimonial-text">{format!("\"{}\"", testimonial.text)}</p>
            </div>

            <div class="testimonial-footer">
                <div class="testimonial-author">
                    <img src={testimonial.image} alt={testimonial.author} />
                    <div>
                        <h4>{testimonial.author}</h4>
                        <p>{testimonial.role}</p>
                    </div>
                </div>
                <div class="testimonial-metric">
                    <Icon kind={IconKind::TrendingUp} size={16} />
                    {testimonial.metric}
                </div>
            </div>
        </div>
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="testimonials">
            <div class="section-container testimonial-grid">
                { for TESTIMONIALS.iter().map(testimonial_card) }
            </div>

            <style>
                {r#"
                .testimonials {
                    padding: 6rem 1.5rem;
                }

                .testimonial-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                }

                .testimonial-card {
                    display: flex;
                    flex-direction: column;
                    justify-content: space-between;
                }

                .stars {
                    display: flex;
                    gap: 0.25rem;
                    margin-bottom: 1.5rem;
                }

                .testimonial-text {
                    font-size: 1.125rem;
                    font-style: italic;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }

                .testimonial-author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .testimonial-author img {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    object-fit: cover;
                    border: 2px solid color-mix(in srgb, var(--primary) 20%, transparent);
                }

                .testimonial-author h4 {
                    margin: 0;
                }

                .testimonial-author p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: var(--text-muted);
                }

                .testimonial-metric {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-top: 1.5rem;
                    padding-top: 1rem;
                    border-top: 1px solid var(--border);
                    color: #4ade80;
                    font-size: 0.875rem;
                    font-weight: 600;
                }

                @media (min-width: 768px) {
                    .testimonial-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                "#}
            </style>
        </section>
    }
}
