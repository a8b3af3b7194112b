use yew::prelude::*;

use crate::components::common::{Button, ButtonVariant};
use crate::components::icons::{Icon, IconKind};
use crate::content::HERO_IMAGE;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-glow hero-glow-primary"></div>
            <div class="hero-glow hero-glow-accent"></div>

            <div class="hero-content">
                <div class="hero-pill">
                    <span class="pulse-dot"></span>
                    {"Novo Motor de IA 2.0 Disponível"}
                </div>

                <h1 class="hero-title">
                    {"BUUDLEADS CRM: A Máquina de "}
                    <span class="gradient-text">{"Crescimento B2B"}</span>
                    {" que sua operação merece."}
                </h1>

                <p class="hero-subtitle">
                    {"Automação, funis inteligentes e nutrição avançada em um só lugar. Tudo pronto para escalar suas vendas com previsibilidade."}
                </p>

                <div class="hero-actions">
                    <Button class={classes!("btn-large")}>
                        {"Experimentar Agora"}
                        <Icon kind={IconKind::ArrowRight} size={18} />
                    </Button>
                    <Button variant={ButtonVariant::Outline} class={classes!("btn-large")}>
                        {"Assistir à Demo"}
                    </Button>
                </div>

                <div class="hero-showcase">
                    <div class="hero-showcase-glow"></div>
                    <div class="hero-frame">
                        <img src={HERO_IMAGE} alt="BUUDLEADS CRM Dashboard" />
                    </div>
                    <p class="hero-caption">{"Baseado na tecnologia do CRM mais avançado do mundo."}</p>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    overflow: hidden;
                    padding: 8rem 1.5rem 5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .hero-glow {
                    position: absolute;
                    border-radius: 9999px;
                    z-index: -1;
                    pointer-events: none;
                }

                .hero-glow-primary {
                    top: 0;
                    left: 50%;
                    transform: translateX(-50%);
                    width: 600px;
                    height: 400px;
                    background: color-mix(in srgb, var(--primary) 20%, transparent);
                    filter: blur(120px);
                    opacity: 0.5;
                }

                .hero-glow-accent {
                    top: 20%;
                    right: 0;
                    width: 400px;
                    height: 400px;
                    background: rgba(168, 85, 247, 0.1);
                    filter: blur(100px);
                    opacity: 0.3;
                }

                .hero-content {
                    max-width: 80rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                .hero-pill {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.375rem 0.75rem;
                    margin-bottom: 2rem;
                    border-radius: 9999px;
                    border: 1px solid var(--border);
                    font-size: 0.875rem;
                    color: var(--primary);
                    animation: fade-in 0.5s ease-out;
                }

                .pulse-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: var(--primary);
                    animation: ping 1.5s cubic-bezier(0, 0, 0.2, 1) infinite;
                }

                .hero-title {
                    font-size: clamp(2.25rem, 6vw, 4.5rem);
                    font-weight: 900;
                    line-height: 1.1;
                    letter-spacing: -0.025em;
                    max-width: 64rem;
                    margin: 0 0 1.5rem;
                    animation: slide-up 0.6s ease-out;
                }

                .gradient-text {
                    background: linear-gradient(to right, var(--primary), #60a5fa, #a855f7);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: var(--text-muted);
                    max-width: 48rem;
                    margin: 0 0 2.5rem;
                    line-height: 1.6;
                }

                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                }

                .hero-showcase {
                    position: relative;
                    margin-top: 5rem;
                    width: 100%;
                    max-width: 72rem;
                }

                .hero-showcase-glow {
                    position: absolute;
                    inset: -0.25rem;
                    border-radius: 1rem;
                    background: linear-gradient(to right, color-mix(in srgb, var(--primary) 30%, transparent), rgba(147, 51, 234, 0.3));
                    filter: blur(24px);
                    opacity: 0.4;
                }

                .hero-frame {
                    position: relative;
                    aspect-ratio: 16 / 10;
                    border-radius: 0.75rem;
                    border: 1px solid var(--border);
                    background: var(--surface);
                    overflow: hidden;
                }

                .hero-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .hero-caption {
                    margin-top: 1.5rem;
                    font-size: 0.875rem;
                    color: var(--text-muted);
                }

                @media (min-width: 768px) {
                    .hero {
                        padding: 12rem 1.5rem 8rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
