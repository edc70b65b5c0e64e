//! Expected on-disk layout, written out independently of the embedded manifest.

pub(crate) const BUILTIN_LAYOUT: [&str; 21] = [
    "src/app/page.tsx",
    "src/app/about-us/page.tsx",
    "src/app/contact-us/page.tsx",
    "src/app/mentors/page.tsx",
    "src/app/resources/page.tsx",
    "src/app/services/page.tsx",
    "src/app/dashboard/page.tsx",
    "src/app/booking/page.tsx",
    "src/app/layout.tsx",
    "src/app/globals.css",
    "src/app/api/auth/[...nextauth]/route.ts",
    "src/app/api/mentors/route.ts",
    "src/app/api/bookings/route.ts",
    "src/app/api/services/route.ts",
    "src/app/api/resources/route.ts",
    "src/lib/utils.ts",
    "src/lib/constants.ts",
    "src/lib/types.ts",
    "src/lib/db/schema.ts",
    "src/lib/db/client.ts",
    "src/styles/theme.ts",
];

/// Parent directories reported as created on a run into an empty root, in order.
pub(crate) const BUILTIN_DIRECTORIES: [&str; 16] = [
    "src/app",
    "src/app/about-us",
    "src/app/contact-us",
    "src/app/mentors",
    "src/app/resources",
    "src/app/services",
    "src/app/dashboard",
    "src/app/booking",
    "src/app/api/auth/[...nextauth]",
    "src/app/api/mentors",
    "src/app/api/bookings",
    "src/app/api/services",
    "src/app/api/resources",
    "src/lib",
    "src/lib/db",
    "src/styles",
];
