use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div class="footer-content">
                <span>"WindSightAI: AI-powered wind turbine blade inspection"</span>
            </div>
        </footer>
    }
}
