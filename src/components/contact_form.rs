use chrono::{Local, NaiveDate};
use gloo_console::log;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config;
use crate::storage;

const FORM_ID: &str = "contact-inquiry";

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InquiryData {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub wedding_date: String,
    #[serde(default)]
    pub venue: String,
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub message: String,
}

/// What actually goes over the wire: the inquiry fields plus the
/// affiliate code the visitor arrived with, if any, so referrals get
/// attributed.
#[derive(Clone, Debug, PartialEq, Serialize)]
struct InquiryPayload {
    #[serde(flatten)]
    inquiry: InquiryData,
    #[serde(skip_serializing_if = "Option::is_none")]
    affiliate_ref: Option<String>,
}

/// Checks the required fields and the wedding date. `today` is passed
/// in so the check is deterministic under test.
pub fn validate(data: &InquiryData, today: NaiveDate) -> Result<(), String> {
    if data.first_name.trim().is_empty() || data.last_name.trim().is_empty() {
        return Err("Please tell us your name.".to_string());
    }
    let email = data.email.trim();
    if email.is_empty() || !email.contains('@') || !email.contains('.') {
        return Err("Please enter a valid email address.".to_string());
    }
    if data.wedding_date.trim().is_empty() {
        return Err("Please select your wedding date.".to_string());
    }
    // Date inputs produce YYYY-MM-DD; anything else gets flagged rather
    // than silently accepted.
    match NaiveDate::parse_from_str(data.wedding_date.trim(), "%Y-%m-%d") {
        Ok(date) if date < today => {
            Err("That wedding date is in the past — double-check the year?".to_string())
        }
        Ok(_) => Ok(()),
        Err(_) => Err("Please select a valid wedding date.".to_string()),
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let data = use_state(InquiryData::default);
    let error = use_state(|| None::<String>);
    let success = use_state(|| None::<String>);
    let is_sending = use_state(|| false);

    // Restore a half-filled form after a reload.
    {
        let data = data.clone();
        use_effect_with_deps(
            move |_| {
                let saved: InquiryData = storage::load_form_data(FORM_ID);
                if saved != InquiryData::default() {
                    data.set(saved);
                }
                || ()
            },
            (),
        );
    }

    // Every edit flows through here: update state, persist the draft.
    let on_edit = {
        let data = data.clone();
        Callback::from(move |updated: InquiryData| {
            storage::save_form_data(FORM_ID, &updated);
            data.set(updated);
        })
    };

    macro_rules! text_field {
        ($field:ident) => {{
            let data = data.clone();
            let on_edit = on_edit.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                let mut updated = (*data).clone();
                updated.$field = input.value();
                on_edit.emit(updated);
            })
        }};
    }

    let on_package = {
        let data = data.clone();
        let on_edit = on_edit.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut updated = (*data).clone();
            updated.package = select.value();
            on_edit.emit(updated);
        })
    };

    let on_message = {
        let data = data.clone();
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut updated = (*data).clone();
            updated.message = area.value();
            on_edit.emit(updated);
        })
    };

    let on_submit = {
        let data = data.clone();
        let error = error.clone();
        let success = success.clone();
        let is_sending = is_sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let inquiry = (*data).clone();
            if let Err(message) = validate(&inquiry, Local::now().date_naive()) {
                error.set(Some(message));
                return;
            }

            error.set(None);
            is_sending.set(true);

            let data = data.clone();
            let error = error.clone();
            let success = success.clone();
            let is_sending = is_sending.clone();
            spawn_local(async move {
                let payload = InquiryPayload {
                    inquiry,
                    affiliate_ref: storage::load(config::AFFILIATE_REF_KEY),
                };
                let request = Request::post(config::form_endpoint())
                    .header("Content-Type", "application/json")
                    .json(&payload);

                let request = match request {
                    Ok(request) => request,
                    Err(e) => {
                        log::warn!("failed to build inquiry request: {e}");
                        error.set(Some("Something went wrong. Please try again.".to_string()));
                        is_sending.set(false);
                        return;
                    }
                };

                match request.send().await {
                    Ok(response) if response.ok() => {
                        log!("inquiry submitted");
                        storage::clear_form_data(FORM_ID);
                        data.set(InquiryData::default());
                        success.set(Some(
                            "Thank you for your inquiry! We will get back to you within 24 hours."
                                .to_string(),
                        ));
                        is_sending.set(false);

                        let success = success.clone();
                        spawn_local(async move {
                            gloo_timers::future::TimeoutFuture::new(8_000).await;
                            success.set(None);
                        });
                    }
                    Ok(response) => {
                        log::warn!("inquiry rejected with status {}", response.status());
                        error.set(Some(
                            "We couldn't send your inquiry. Please try again or email us directly."
                                .to_string(),
                        ));
                        is_sending.set(false);
                    }
                    Err(e) => {
                        log::warn!("inquiry request failed: {e}");
                        error.set(Some(
                            "Network error — please check your connection and try again."
                                .to_string(),
                        ));
                        is_sending.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="floating-panel-dark">
            <h2 class="section-heading accent">{"Inquire Now"}</h2>

            <form onsubmit={on_submit} class="inquiry-form">
                {
                    if let Some(message) = (*error).clone() {
                        html! { <div class="form-banner form-error">{ message }</div> }
                    } else {
                        html! {}
                    }
                }
                {
                    if let Some(message) = (*success).clone() {
                        html! { <div class="form-banner form-success">{ message }</div> }
                    } else {
                        html! {}
                    }
                }

                <div class="form-grid-2">
                    <input
                        type="text"
                        placeholder="First Name *"
                        value={data.first_name.clone()}
                        oninput={text_field!(first_name)}
                        class="input-inset"
                    />
                    <input
                        type="text"
                        placeholder="Last Name *"
                        value={data.last_name.clone()}
                        oninput={text_field!(last_name)}
                        class="input-inset"
                    />
                </div>

                <input
                    type="email"
                    placeholder="Email Address *"
                    value={data.email.clone()}
                    oninput={text_field!(email)}
                    class="input-inset"
                />

                <input
                    type="tel"
                    placeholder="Phone Number"
                    value={data.phone.clone()}
                    oninput={text_field!(phone)}
                    class="input-inset"
                />

                <input
                    type="date"
                    placeholder="Wedding Date *"
                    value={data.wedding_date.clone()}
                    oninput={text_field!(wedding_date)}
                    class="input-inset"
                />

                <input
                    type="text"
                    placeholder="Wedding Venue"
                    value={data.venue.clone()}
                    oninput={text_field!(venue)}
                    class="input-inset"
                />

                <select onchange={on_package} class="input-inset">
                    <option value="" selected={data.package.is_empty()}>{"Select Package"}</option>
                    <option value="essential" selected={data.package == "essential"}>{"Essential Package"}</option>
                    <option value="premium" selected={data.package == "premium"}>{"Premium Package"}</option>
                    <option value="luxury" selected={data.package == "luxury"}>{"Luxury Package"}</option>
                    <option value="custom" selected={data.package == "custom"}>{"Custom Package"}</option>
                </select>

                <textarea
                    placeholder="Tell us about your wedding vision, special requests, or any questions you have..."
                    rows="4"
                    value={data.message.clone()}
                    oninput={on_message}
                    class="input-inset"
                />

                <button type="submit" disabled={*is_sending} class="btn-pill btn-primary">
                    { if *is_sending { "Sending..." } else { "Send Inquiry" } }
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    fn filled() -> InquiryData {
        InquiryData {
            first_name: "Claire".to_string(),
            last_name: "Moreau".to_string(),
            email: "claire@example.com".to_string(),
            wedding_date: "2026-09-12".to_string(),
            ..InquiryData::default()
        }
    }

    #[test]
    fn accepts_a_complete_inquiry() {
        assert!(validate(&filled(), today()).is_ok());
    }

    #[test]
    fn rejects_missing_names() {
        let mut data = filled();
        data.first_name = "  ".to_string();
        assert!(validate(&data, today()).is_err());

        let mut data = filled();
        data.last_name.clear();
        assert!(validate(&data, today()).is_err());
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["", "not-an-email", "missing-dot@host"] {
            let mut data = filled();
            data.email = email.to_string();
            assert!(validate(&data, today()).is_err(), "email = {email:?}");
        }
    }

    #[test]
    fn rejects_past_wedding_date() {
        let mut data = filled();
        data.wedding_date = "2024-05-01".to_string();
        assert!(validate(&data, today()).is_err());
    }

    #[test]
    fn accepts_a_wedding_today() {
        let mut data = filled();
        data.wedding_date = "2026-06-15".to_string();
        assert!(validate(&data, today()).is_ok());
    }

    #[test]
    fn rejects_unparseable_date() {
        let mut data = filled();
        data.wedding_date = "next summer".to_string();
        assert!(validate(&data, today()).is_err());
    }

    #[test]
    fn payload_carries_affiliate_code_alongside_inquiry_fields() {
        let payload = InquiryPayload {
            inquiry: filled(),
            affiliate_ref: Some("amelie-k".to_string()),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["affiliate_ref"], "amelie-k");
        // Flattened: inquiry fields sit at the top level.
        assert_eq!(json["email"], "claire@example.com");
        assert_eq!(json["first_name"], "Claire");
    }

    #[test]
    fn payload_omits_affiliate_code_when_none_is_stored() {
        let payload = InquiryPayload {
            inquiry: filled(),
            affiliate_ref: None,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("affiliate_ref").is_none());
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let data = filled();
        assert!(data.phone.is_empty() && data.venue.is_empty());
        assert!(validate(&data, today()).is_ok());
    }
}
