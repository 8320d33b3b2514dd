use super::{
    ApproachSection, CompanySection, ContactSection, PledgeGrid, ResponsiveContainer,
    ServiceCards, SiteFooter, StatisticsSection,
};
use leptos::prelude::*;

/// The whole page below the hero, wrapped in the responsive container.
#[component]
pub fn HomepageLayout() -> impl IntoView {
    view! {
        <ResponsiveContainer>
            <CompanySection />
            <StatisticsSection />
            <ServiceCards />
            <ApproachSection />
            <PledgeGrid />
            <ContactSection />
            <SiteFooter />
        </ResponsiveContainer>
    }
}
