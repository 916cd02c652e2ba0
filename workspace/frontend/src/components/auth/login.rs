use web_sys::HtmlFormElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;
use crate::auth::AuthContext;

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_context::<AuthContext>().unwrap();
    let navigator = use_navigator().unwrap();
    let form_ref = use_node_ref();
    let error_message = use_state(|| None::<String>);

    // A resumed or fresh session skips the form entirely.
    if auth.is_logged_in() {
        return html! { <Redirect<Route> to={Route::Dashboard} /> };
    }

    let on_submit = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let form_ref = form_ref.clone();
        let error_message = error_message.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                return;
            };
            let form_data = web_sys::FormData::new_with_form(&form).unwrap();

            let email = form_data.get("email").as_string().unwrap_or_default();
            let password = form_data.get("password").as_string().unwrap_or_default();
            let remember = form_data
                .get("remember")
                .as_string()
                .map(|v| v == "on")
                .unwrap_or(false);

            if auth.login(&email, &password, remember) {
                error_message.set(None);
                navigator.push(&Route::Dashboard);
            } else {
                error_message.set(Some("Invalid email or password!".to_string()));
            }
        })
    };

    html! {
        <div class="min-h-screen flex items-center justify-center bg-base-200 p-4">
            <div class="card w-full max-w-sm bg-base-100 shadow-xl">
                <div class="card-body">
                    <h2 class="card-title">{"Welcome back"}</h2>
                    <p class="text-sm opacity-70">{"Sign in to the weather dashboard"}</p>

                    {if let Some(error) = (*error_message).as_ref() {
                        html! {
                            <div class="alert alert-error mt-2">
                                <span>{error}</span>
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
                                placeholder="you@example.com"
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
                            <label class="label cursor-pointer justify-start gap-2">
                                <input type="checkbox" name="remember" class="checkbox checkbox-sm" />
                                <span class="label-text">{"Remember me"}</span>
                            </label>
                        </div>
                        <button type="submit" class="btn btn-primary w-full">{"Login"}</button>
                    </form>

                    <div class="flex justify-between text-sm mt-4">
                        <Link<Route> to={Route::ForgotPassword} classes="link link-hover">
                            {"Forgot password?"}
                        </Link<Route>>
                        <Link<Route> to={Route::Signup} classes="link link-hover">
                            {"Create account"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </div>
    }
}
