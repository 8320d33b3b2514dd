//! Contact form.
//!
//! Static markup only: there is no submit handler, no validation and no
//! endpoint. Submission is suppressed so the button never reloads the page.

use super::{Icon, ICON_ENVELOPE};
use crate::content::GENDER_OPTIONS;
use crate::nav::Section;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ContactSection() -> impl IntoView {
    let gender_options = GENDER_OPTIONS
        .iter()
        .map(|option| view! { <option value=option.value>{option.text}</option> })
        .collect::<Vec<_>>();

    view! {
        <h3 id=Section::Contact.id() class="header header-icon" style="margin: 0.5em;">
            <Icon path=ICON_ENVELOPE size="32" color="#304D8A" />
            <div class="header-content">
                "Contact Us"
                <div class="header-sub">"Send us a web mail now"</div>
            </div>
        </h3>
        <div class="segment" style="margin: 0.1em;">
            <form class="form" style="margin: 0.1em;" on:submit=move |ev: SubmitEvent| ev.prevent_default()>
                <div class="fields fields-equal">
                    <div class="field">
                        <label>
                            "First name"
                            <input id="form-input-control-first-name" type="text" placeholder="First name" />
                        </label>
                    </div>
                    <div class="field">
                        <label>
                            "Last name"
                            <input id="form-input-control-last-name" type="text" placeholder="Last name" />
                        </label>
                    </div>
                    <div class="field">
                        <label>
                            "Gender"
                            <select id="form-select-control-gender" name="gender">
                                <option value="" disabled=true selected=true>"Gender"</option>
                                {gender_options}
                            </select>
                        </label>
                    </div>
                </div>
                <div class="field">
                    <label>"Email" <input type="email" placeholder="Email" /></label>
                </div>
                <div class="field">
                    <label>
                        "Message"
                        <textarea id="form-textarea-control-opinion" placeholder="Message"></textarea>
                    </label>
                </div>
                <div class="field">
                    <button id="form-button-control-public" type="submit" class="button button-facebook">
                        "Send Mail"
                    </button>
                </div>
            </form>
        </div>
    }
}
