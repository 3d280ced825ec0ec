//! Marketing home page: hero, service catalog, process steps and FAQ.

use leptos::*;
use leptos_meta::Title;

use crate::components::{FaqSection, Hero, ServiceCard, StepCard};

const FAQ_ITEMS: &[(&str, &str)] = &[
    (
        "How long does company registration take?",
        "Typically 7-10 working days once all documents are verified. Name approval \
         from the registrar is the longest step and outside our control.",
    ),
    (
        "Are government fees included in the price shown?",
        "Yes. Every review step shows the professional fee and the statutory government \
         fee separately, and you pay the combined total once.",
    ),
    (
        "What happens after I submit an application?",
        "You receive an application ID immediately. A dedicated professional reviews your \
         documents, files with the authority, and keeps you updated over email.",
    ),
    (
        "Can I use the same documents across services?",
        "Uploaded documents belong to one application. Your contact details are remembered \
         in your browser, so starting the next service takes under a minute.",
    ),
    (
        "What if my application is rejected by the authority?",
        "We fix the objection and refile at no extra professional fee. Government fees for \
         refiling, where applicable, are charged at cost.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="FilingDesk — Compliance filings made simple"/>

        <Hero/>

        <section class="services-section" id="services">
            <h2>"Popular services"</h2>
            <div class="service-cards">
                <ServiceCard
                    icon="🏢"
                    name="Company Registration"
                    blurb="Incorporate a private limited company with DIN, PAN and incorporation certificate."
                    price_from=8_499
                    href="/services/company-registration"
                />
                <ServiceCard
                    icon="™️"
                    name="Trademark Registration"
                    blurb="Protect your brand name and logo across Nice classes."
                    price_from=6_499
                    href="/services/trademark"
                />
                <ServiceCard
                    icon="💡"
                    name="Patent Filing"
                    blurb="Provisional or complete specification drafted and filed by patent agents."
                    price_from=16_599
                    href="/services/patent"
                />
                <ServiceCard
                    icon="👷"
                    name="PF & ESI Registration"
                    blurb="Employer registration under EPF and ESI for your establishment."
                    price_from=3_999
                    href="/services/labour-compliance"
                />
                <ServiceCard
                    icon="🍲"
                    name="FSSAI Food License"
                    blurb="Basic, state or central food business license with annual validity."
                    price_from=1_599
                    href="/services/fssai-license"
                />
                <ServiceCard
                    icon="🔏"
                    name="Digital Signature"
                    blurb="Class 3 DSC for e-filing, tenders and MCA forms."
                    price_from=1_499
                    href="/services/digital-signature"
                />
            </div>
        </section>

        <section class="how-it-works" id="how-it-works">
            <h2>"How it works"</h2>
            <div class="step-cards">
                <StepCard
                    number="1"
                    title="Pick a service"
                    description="Transparent pricing up front, professional and government fees itemized."
                />
                <StepCard
                    number="2"
                    title="Fill in your details"
                    description="A short guided form. Your contact details are pre-filled on repeat visits."
                />
                <StepCard
                    number="3"
                    title="Upload documents"
                    description="Each document is checked and stored securely the moment you select it."
                />
                <StepCard
                    number="4"
                    title="Pay and relax"
                    description="Pay online and get an application ID. A professional takes it from there."
                />
            </div>
        </section>

        <FaqSection items=FAQ_ITEMS/>
    }
}
