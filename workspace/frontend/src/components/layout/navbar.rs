use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub user_name: String,
    pub on_logout: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    // Greet by first name, like the dashboard header copy.
    let first_name = props
        .user_name
        .split_whitespace()
        .next()
        .unwrap_or("there")
        .to_string();

    let onclick = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <div class="navbar bg-base-100 shadow-sm z-40 sticky top-0">
            <div class="flex-1 px-4">
                <h1 class="text-xl font-bold">{"Weather Analytics"}</h1>
            </div>
            <div class="flex-none gap-3 px-2">
                <span class="hidden md:inline text-sm opacity-70">{format!("Hi, {}", first_name)}</span>
                <button class="btn btn-sm btn-outline" onclick={onclick}>
                    <i class="fas fa-sign-out-alt"></i>
                    {"Logout"}
                </button>
            </div>
        </div>
    }
}
