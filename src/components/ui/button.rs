use leptos::prelude::*;
use leptos_ui::variants;

variants! {
    Button {
        base: "inline-flex items-center justify-center gap-2 whitespace-nowrap rounded-button text-sm font-medium transition-all disabled:pointer-events-none disabled:opacity-50 [&_svg]:pointer-events-none [&_svg:not([class*='size-'])]:size-4 shrink-0 [&_svg]:shrink-0 outline-none focus-visible:ring-primary/50 focus-visible:ring-[3px] hover:cursor-pointer active:scale-[0.98] touch-manipulation select-none",
        variants: {
            variant: {
                Default: "bg-primary text-white shadow-xs hover:bg-primary/90",
                Outline: "border border-primary text-primary bg-white hover:bg-primary/5",
            },
            size: {
                Default: "h-10 px-5 py-2",
                Lg: "h-12 px-8 text-base",
            }
        },
        component: {
            element: button
        }
    }
}
