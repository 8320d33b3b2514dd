use super::Icon;
use crate::content::STATISTICS;
use crate::nav::Section;
use leptos::prelude::*;

/// Three headline numbers. Carries the `#Services` anchor.
#[component]
pub fn StatisticsSection() -> impl IntoView {
    view! {
        <section
            id=Section::Services.id()
            class="segment segment-vertical segment-raised"
            style="padding: 6em 0em;"
        >
            <div class="grid grid-columns-3 grid-stackable centered">
                <div class="row grid-middle">
                    {STATISTICS.iter().map(|stat| {
                        view! {
                            <div class="column">
                                <div class="statistic">
                                    <div class="statistic-value">
                                        <Icon path=stat.icon size="40" />
                                        {stat.value}
                                    </div>
                                    <div class="statistic-label">{stat.label}</div>
                                </div>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
