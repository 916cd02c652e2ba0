use gloo_timers::callback::Timeout;
use web_sys::HtmlFormElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::auth::AuthContext;

/// Delay before returning to the login form after a "sent" notice.
const RESET_REDIRECT_MS: u32 = 3_000;

#[function_component(ForgotPassword)]
pub fn forgot_password() -> Html {
    let auth = use_context::<AuthContext>().unwrap();
    let navigator = use_navigator().unwrap();
    let form_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);
    let show_success = use_state(|| false);

    let on_submit = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let form_ref = form_ref.clone();
        let error_message = error_message.clone();
        let show_success = show_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let form_data = web_sys::FormData::new_with_form(&form).unwrap();
            let email = form_data.get("email").as_string().unwrap_or_default();

            let known = auth.directory.borrow().find_by_email(&email).is_some();
            if known {
                // No delivery pipeline exists; the notice is simulated.
                log::info!("Password reset link would be sent to: {}", email);
                error_message.set(None);
                show_success.set(true);

                let navigator = navigator.clone();
                Timeout::new(RESET_REDIRECT_MS, move || {
                    navigator.push(&Route::Login);
                })
                .forget();
            } else {
                show_success.set(false);
                error_message.set(Some("No account found with that email.".to_string()));
            }
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 p-4">
            <div class="card w-full max-w-sm bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{"Reset password"}</h2>
                    <p class="text-sm opacity-70">
                        {"Enter your email and we'll send you a reset link."}
                    </p>

                    {if let Some(error) = (*error_message).as_ref() {
                        html! {
                            <div class="alert alert-error mt-2">
                                <span>{error}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    {if *show_success {
                        html! {
                            <div class="alert alert-success mt-2">
                                <span>{"Reset link sent! Check your inbox."}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <form ref={form_ref} onsubmit={on_submit} class="space-y-4 mt-2">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Email"}</span></label>
                            <input
                                type="email"
                                name="email"
                                class="input input-bordered w-full"
                                required={true}
                            />
                        </div>
                        <button type="submit" class="btn btn-primary w-full">{"Send reset link"}</button>
                    </form>

                    <div class="text-sm text-center mt-4">
                        <Link<Route> to={Route::Login} classes="link link-hover">
                            {"Back to login"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
