use gloo_timers::callback::Timeout;
use web_sys::HtmlFormElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::auth::AuthContext;
use crate::storage::DirectoryStore;

/// Delay before bouncing a fresh account to the login form.
const SIGNUP_REDIRECT_MS: u32 = 2_000;

#[function_component(Signup)]
pub fn signup() -> Html {
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

            let request = common::SignupRequest {
                name: form_data.get("name").as_string().unwrap_or_default(),
                email: form_data.get("email").as_string().unwrap_or_default(),
                password: form_data.get("password").as_string().unwrap_or_default(),
                confirm_password: form_data
                    .get("confirm_password")
                    .as_string()
                    .unwrap_or_default(),
            };

            let result = common::signup(&mut auth.directory.borrow_mut(), request);
            match result {
                Ok(_) => {
                    // The directory changed; write the snapshot so the
                    // account survives a reload.
                    if let Err(err) = DirectoryStore.save(&auth.directory.borrow()) {
                        log::error!("Failed to persist user directory: {:?}", err);
                    }
                    error_message.set(None);
                    show_success.set(true);

                    let navigator = navigator.clone();
                    Timeout::new(SIGNUP_REDIRECT_MS, move || {
                        navigator.push(&Route::Login);
                    })
                    .forget();
                }
                Err(err) => {
                    show_success.set(false);
                    error_message.set(Some(err.to_string()));
                }
            }
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 p-4">
            <div class="card w-full max-w-sm bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{"Create account"}</h2>
                    <p class="text-sm opacity-70">{"Track your station in minutes"}</p>

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
                                <span>{"Account created! Redirecting to login..."}</span>
                            </div>
                        }
                    } else {
                        html! {}
                    }}

                    <form ref={form_ref} onsubmit={on_submit} class="space-y-4 mt-2">
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Full name"}</span></label>
                            <input
                                type="text"
                                name="name"
                                class="input input-bordered w-full"
                                required={true}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Email"}</span></label>
                            <input
                                type="email"
                                name="email"
                                class="input input-bordered w-full"
                                required={true}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Password"}</span></label>
                            <input
                                type="password"
                                name="password"
                                class="input input-bordered w-full"
                                required={true}
                            />
                        </div>
                        <div class="form-control">
                            <label class="label"><span class="label-text">{"Confirm password"}</span></label>
                            <input
                                type="password"
                                name="confirm_password"
                                class="input input-bordered w-full"
                                required={true}
                            />
                        </div>
                        <button type="submit" class="btn btn-primary w-full">{"Sign up"}</button>
                    </form>

                    <div class="text-sm text-center mt-4">
                        <Link<Route> to={Route::Login} classes="link link-hover">
                            {"Already have an account? Login"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
