use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{
    BirthdayPage, BlogPage, BookingPage, ContactPage, FaqPage, GamePage, HomePage, NotFoundPage,
    PricingPage,
};
use crate::ui::{
    Footer, Navigation, ScrollToTop, Toaster, provide_locale_context, provide_notice_manager,
};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="bg-black text-gray-200">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let _locale_ctx = provide_locale_context();
    let notices = provide_notice_manager();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/tigertag.css"/>

        // sets the document title
        <Title text="Tiger Laser Tag Marbella"/>

        <Router>
            <ScrollToTop/>
            <Navigation/>
            <main class="min-h-screen">
                <Routes fallback=NotFoundPage>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/el-juego") view=GamePage/>
                    <Route path=path!("/precios") view=PricingPage/>
                    <Route path=path!("/cumpleanos") view=BirthdayPage/>
                    <Route path=path!("/faq") view=FaqPage/>
                    <Route path=path!("/blog") view=BlogPage/>
                    <Route path=path!("/contacto") view=ContactPage/>
                    <Route path=path!("/reserva") view=BookingPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>

        <Toaster notices=notices.notices()/>
    }
}
