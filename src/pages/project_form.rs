use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::Icon;
use crate::content::{BUDGET_TIERS, FORM_NICHES, PRICING_PLANS};
use crate::lead::{self, FailurePolicy, ProjectRequest, SubmitStatus};

#[derive(Properties, PartialEq)]
pub struct ProjectFormProps {
    /// Plan carried over from a pricing-card selection, if any.
    #[prop_or_default]
    pub plan: Option<String>,
    pub on_back: Callback<()>,
}

/// Full-screen project request. The submission deliberately lands in the
/// success state whatever the endpoint answers; see the lead module.
#[function_component(ProjectForm)]
pub fn project_form(props: &ProjectFormProps) -> Html {
    let draft = {
        let plan = props.plan.clone();
        use_state(move || ProjectRequest::with_plan(plan))
    };
    let status = use_state(|| SubmitStatus::Idle);

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    if *status == SubmitStatus::Success {
        return html! {
            <main class="form-page form-success">
                <div class="success-card">
                    <div class="success-tick">{ Icon::CheckCircle.render(32) }</div>
                    <h2>{"Project Received!"}</h2>
                    <p>
                        {"Thank you for reaching out. We've received your project details and will \
                          get back to you within 24 hours to schedule a strategy call."}
                    </p>
                    <button class="button button-primary" onclick={back}>{"Back to Home"}</button>
                </div>
            </main>
        };
    }

    let onsubmit = {
        let draft = draft.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *status == SubmitStatus::Submitting {
                return;
            }
            status.set(SubmitStatus::Submitting);
            let payload = (*draft).clone();
            let status = status.clone();
            spawn_local(async move {
                let outcome = lead::submit(&payload, FailurePolicy::TreatAsSuccess).await;
                status.set(outcome);
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            });
        })
    };

    html! {
        <main class="form-page">
            <button class="back-button" onclick={back.clone()}>
                { Icon::ArrowLeft.render(20) }
                {"Back to Home"}
            </button>

            <div class="form-heading">
                <h1>{"Start Your Project"}</h1>
                <p>{"Tell us about your brand and let's build something high-performing together."}</p>
            </div>

            <form class="project-form" {onsubmit}>
                <div class="form-row">
                    <div class="form-field">
                        <label>{"Full Name"}</label>
                        <input
                            type="text"
                            required=true
                            placeholder="John Doe"
                            value={draft.name.clone()}
                            onchange={{
                                let draft = draft.clone();
                                move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    draft.set(ProjectRequest { name: input.value(), ..(*draft).clone() });
                                }
                            }}
                        />
                    </div>
                    <div class="form-field">
                        <label>{"Work Email"}</label>
                        <input
                            type="email"
                            required=true
                            placeholder="john@brand.com"
                            value={draft.email.clone()}
                            onchange={{
                                let draft = draft.clone();
                                move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    draft.set(ProjectRequest { email: input.value(), ..(*draft).clone() });
                                }
                            }}
                        />
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-field">
                        <label>{"Brand Name"}</label>
                        <input
                            type="text"
                            required=true
                            placeholder="Your Brand"
                            value={draft.brand.clone()}
                            onchange={{
                                let draft = draft.clone();
                                move |e: Event| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    draft.set(ProjectRequest { brand: input.value(), ..(*draft).clone() });
                                }
                            }}
                        />
                    </div>
                    <div class="form-field">
                        <label>{"Niche / Category"}</label>
                        <select
                            required=true
                            onchange={{
                                let draft = draft.clone();
                                move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    draft.set(ProjectRequest { niche: select.value(), ..(*draft).clone() });
                                }
                            }}
                        >
                            <option value="" selected={draft.niche.is_empty()}>{"Select Niche"}</option>
                            { for FORM_NICHES.iter().map(|(value, label)| html! {
                                <option value={*value} selected={draft.niche == *value}>{label}</option>
                            }) }
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="form-field">
                        <label>{"Project Budget"}</label>
                        <select
                            required=true
                            onchange={{
                                let draft = draft.clone();
                                move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    draft.set(ProjectRequest { budget: select.value(), ..(*draft).clone() });
                                }
                            }}
                        >
                            <option value="" selected={draft.budget.is_empty()}>{"Select Budget"}</option>
                            { for BUDGET_TIERS.iter().map(|(value, label)| html! {
                                <option value={*value} selected={draft.budget == *value}>{label}</option>
                            }) }
                        </select>
                    </div>
                    <div class="form-field">
                        <label>{"Selected Package"}</label>
                        <select
                            onchange={{
                                let draft = draft.clone();
                                move |e: Event| {
                                    let select: HtmlSelectElement = e.target_unchecked_into();
                                    draft.set(ProjectRequest { plan: select.value(), ..(*draft).clone() });
                                }
                            }}
                        >
                            <option value="" selected={draft.plan.is_empty()}>{"Custom / Not Sure"}</option>
                            { for PRICING_PLANS.iter().map(|plan| html! {
                                <option value={plan.name} selected={draft.plan == plan.name}>
                                    {format!("{} - {}", plan.name, plan.price)}
                                </option>
                            }) }
                        </select>
                    </div>
                </div>

                <div class="form-field">
                    <label>{"Project Details & Goals"}</label>
                    <textarea
                        rows="4"
                        required=true
                        placeholder="Tell us about your goals, target audience, and any specific requirements..."
                        value={draft.project_details.clone()}
                        onchange={{
                            let draft = draft.clone();
                            move |e: Event| {
                                let area: HtmlTextAreaElement = e.target_unchecked_into();
                                draft.set(ProjectRequest { project_details: area.value(), ..(*draft).clone() });
                            }
                        }}
                    />
                </div>

                <button
                    type="submit"
                    class="button button-primary button-wide"
                    disabled={*status == SubmitStatus::Submitting}
                >
                    {
                        if *status == SubmitStatus::Submitting {
                            html! { <span class="spinner" /> }
                        } else {
                            html! { <>{"Submit Project Request "}{ Icon::ArrowRight.render(20) }</> }
                        }
                    }
                </button>
            </form>
        </main>
    }
}
