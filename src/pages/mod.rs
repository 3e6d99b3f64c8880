use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle,
    Input, Label, Spinner, Textarea,
};
use crate::models::FormFields;
use crate::nav::{nav_panel_class, scroll_to_fragment};
use crate::state::submission::{encode_and_dispatch, validate_attachment_count};
use crate::state::{Guards, PageContext, SubmissionPhase};
use crate::upload::{files_of, preview_names, validate_selection};
use crate::util::{alert, now_iso_timestamp};
use icons::{FileText, Menu, Upload};
use leptos::prelude::*;
use leptos::task::spawn_local;

const NAV_LINK: &str = "text-gray-700 hover:text-primary transition-colors";

/// In-page link that smooth-scrolls to its fragment instead of jumping.
#[component]
pub fn AnchorLink(
    #[prop(into)] href: String,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let nav_open = expect_context::<PageContext>().0.nav_open;
    let target = href.clone();

    let on_click = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();

        if scroll_to_fragment(&target) {
            if nav_open.get_untracked() {
                nav_open.set(false);
            }
        } else {
            tracing::debug!(href = %target, "anchor target not found");
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let nav_open = expect_context::<PageContext>().0.nav_open;

    view! {
        <nav class="fixed top-0 left-0 right-0 z-40 bg-white shadow-sm">
            <div class="relative mx-auto flex h-16 max-w-6xl items-center justify-between px-4">
                <AnchorLink href="#home" class="text-2xl font-semibold text-primary">
                    "IdeaBridge"
                </AnchorLink>

                <div class=move || nav_panel_class(nav_open.get())>
                    <AnchorLink href="#home" class=NAV_LINK>"Home"</AnchorLink>
                    <AnchorLink href="#about" class=NAV_LINK>"About"</AnchorLink>
                    <AnchorLink href="#process" class=NAV_LINK>"How it works"</AnchorLink>
                    <AnchorLink href="#contact" class=NAV_LINK>"Submit an idea"</AnchorLink>
                </div>

                <button
                    type="button"
                    class="md:hidden inline-flex size-10 items-center justify-center text-gray-700"
                    aria-label="Toggle navigation"
                    aria-expanded=move || nav_open.get().to_string()
                    on:click=move |_| nav_open.update(|open| *open = !*open)
                >
                    <Menu class="size-6" />
                </button>
            </div>
        </nav>
    }
}

#[component]
pub fn UploadWidget() -> impl IntoView {
    let state = expect_context::<PageContext>().0;
    let guards = state.guards;
    let preview = state.preview;
    let file_input = state.file_input;

    let on_pick = move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        if !guards.get_untracked().can_open_picker() {
            tracing::debug!("file picker suppressed while busy");
            return;
        }
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_change = move |_: web_sys::Event| {
        if !guards.try_update(Guards::begin_file_processing).unwrap_or(false) {
            return;
        }

        if let Some(input) = file_input.get_untracked() {
            let files = files_of(&input);
            if !files.is_empty() {
                match validate_selection(&files) {
                    Ok(()) => preview.set(preview_names(&files)),
                    Err(e) => {
                        tracing::warn!(error = %e, files = files.len(), "rejected file selection");
                        alert(&e.to_string());
                        input.set_value("");
                        preview.set(vec![]);
                    }
                }
            }
        }

        guards.update(Guards::end_file_processing);
    };

    view! {
        <div class="rounded-lg border-2 border-dashed border-gray-300 p-6 text-center">
            <Upload class="mx-auto size-8 text-gray-400" />
            <p class="mt-2 text-sm text-gray-600">
                "Attach at least two PDFs: your proposal and any supporting documents."
            </p>
            <input
                type="file"
                id="files"
                name="files"
                class="hidden"
                multiple=true
                accept=".pdf,application/pdf"
                node_ref=file_input
                on:change=on_change
            />
            <Button
                class="mt-4"
                variant=ButtonVariant::Outline
                attr:r#type="button"
                on:click=on_pick
            >
                "Choose PDF files"
            </Button>
            <div id="fileList" class="mt-2 text-left">
                {move || {
                    preview
                        .get()
                        .into_iter()
                        .map(|name| {
                            view! {
                                <div class="flex items-center text-sm text-gray-700 mt-2">
                                    <FileText class="mr-2 size-4 text-primary" />
                                    {name}
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let state = expect_context::<PageContext>().0;
    let guards = state.guards;

    let full_name: RwSignal<String> = RwSignal::new(String::new());
    let email: RwSignal<String> = RwSignal::new(String::new());
    let college: RwSignal<String> = RwSignal::new(String::new());
    let subject: RwSignal<String> = RwSignal::new(String::new());
    let message: RwSignal<String> = RwSignal::new(String::new());

    let reset_fields = move || {
        for field in [full_name, email, college, subject, message] {
            field.set(String::new());
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if !guards.try_update(Guards::begin_submission).unwrap_or(false) {
            return;
        }

        let files = state
            .file_input
            .get_untracked()
            .map(|input| files_of(&input))
            .unwrap_or_default();

        if let Err(e) = validate_attachment_count(files.len()) {
            alert(&e.alert_message());
            guards.update(|g| {
                g.advance(SubmissionPhase::Idle);
            });
            return;
        }

        let fields = FormFields {
            full_name: full_name.get_untracked(),
            email: email.get_untracked(),
            college: college.get_untracked(),
            subject: subject.get_untracked(),
            message: message.get_untracked(),
        };
        let transport = state.transport.get_value();
        let state = state.clone();

        spawn_local(async move {
            let result = encode_and_dispatch(
                &*transport,
                fields,
                &files,
                now_iso_timestamp(),
                |phase| {
                    guards.update(|g| {
                        g.advance(phase);
                    });
                },
            )
            .await;

            match result {
                Ok(()) => {
                    guards.update(|g| {
                        g.advance(SubmissionPhase::Succeeded);
                    });
                    tracing::info!("submission accepted");
                    alert("Form submitted successfully!");
                    reset_fields();
                    state.preview.set(vec![]);
                    state.clear_file_input();
                }
                Err(e) => {
                    guards.update(|g| {
                        g.advance(SubmissionPhase::Failed);
                    });
                    tracing::error!(error = %e, "submission error");
                    alert(&e.alert_message());
                }
            }

            guards.update(Guards::finish_submission);
        });
    };

    let busy = move || guards.get().phase().is_busy();

    view! {
        <form id="ideaForm" class="flex flex-col gap-5" on:submit=on_submit>
            <div class="grid gap-5 md:grid-cols-2">
                <div>
                    <Label html_for="fullName">"Full name"</Label>
                    <Input id="fullName" name="fullName" placeholder="Jane Doe" bind_value=full_name />
                </div>
                <div>
                    <Label html_for="email">"Email"</Label>
                    <Input id="email" name="email" r#type="email" placeholder="you@example.com" bind_value=email />
                </div>
                <div>
                    <Label html_for="college">"College / organization"</Label>
                    <Input id="college" name="college" placeholder="Where you study or work" bind_value=college />
                </div>
                <div>
                    <Label html_for="subject">"Subject"</Label>
                    <Input id="subject" name="subject" placeholder="One line about your idea" bind_value=subject />
                </div>
            </div>

            <div>
                <Label html_for="message">"Message"</Label>
                <Textarea id="message" name="message" placeholder="Tell us what you are building and why." bind_value=message />
            </div>

            <UploadWidget />

            <Button
                class="w-full"
                size=ButtonSize::Lg
                attr:r#type="submit"
                attr:disabled=busy
            >
                <span class="inline-flex items-center gap-2">
                    <Show when=busy fallback=|| ().into_view()>
                        <Spinner />
                    </Show>
                    {move || if busy() { "Submitting..." } else { "Submit Idea" }}
                </span>
            </Button>
        </form>
    }
}

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <NavBar />

        <main class="pt-16">
            <section id="home" class="bg-gradient-to-b from-blue-50 to-white py-24">
                <div class="mx-auto max-w-4xl px-4 text-center">
                    <h1 class="text-4xl font-bold text-gray-900 md:text-5xl">
                        "Turn your idea into something real"
                    </h1>
                    <p class="mt-6 text-lg text-secondary">
                        "Share your proposal with our review panel. Every submission is read by a person."
                    </p>
                    <div class="mt-8 flex justify-center gap-4">
                        <AnchorLink
                            href="#contact"
                            class="rounded-button bg-primary px-6 py-3 font-medium text-white hover:bg-primary/90"
                        >
                            "Submit an idea"
                        </AnchorLink>
                        <AnchorLink
                            href="#process"
                            class="px-6 py-3 font-medium text-primary underline-offset-4 hover:underline"
                        >
                            "How it works"
                        </AnchorLink>
                    </div>
                </div>
            </section>

            <section id="about" class="py-20">
                <div class="mx-auto max-w-4xl px-4">
                    <h2 class="text-3xl font-bold text-gray-900">"About"</h2>
                    <p class="mt-4 text-secondary">
                        "We connect students and early-stage teams with mentors who can help move an idea from a document to a working project."
                    </p>
                </div>
            </section>

            <section id="process" class="bg-gray-50 py-20">
                <div class="mx-auto grid max-w-6xl gap-6 px-4 md:grid-cols-3">
                    <Card>
                        <CardHeader>
                            <CardTitle>"1. Write it down"</CardTitle>
                            <CardDescription>"A short proposal and one supporting document, both as PDF."</CardDescription>
                        </CardHeader>
                    </Card>
                    <Card>
                        <CardHeader>
                            <CardTitle>"2. Submit"</CardTitle>
                            <CardDescription>"Fill in the form below and attach your files."</CardDescription>
                        </CardHeader>
                    </Card>
                    <Card>
                        <CardHeader>
                            <CardTitle>"3. Hear back"</CardTitle>
                            <CardDescription>"We reply by email once the panel has reviewed it."</CardDescription>
                        </CardHeader>
                    </Card>
                </div>
            </section>

            <section id="contact" class="py-20">
                <div class="mx-auto max-w-3xl px-4">
                    <Card>
                        <CardHeader>
                            <CardTitle class="text-2xl">"Submit your idea"</CardTitle>
                            <CardDescription>"Tell us about your idea. PDF attachments only."</CardDescription>
                        </CardHeader>
                        <CardContent>
                            <ContactForm />
                        </CardContent>
                    </Card>
                </div>
            </section>
        </main>

        <footer class="border-t border-gray-100 py-8 text-center text-sm text-secondary">
            "IdeaBridge"
        </footer>
    }
}
