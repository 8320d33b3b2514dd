//! Static page copy and contact details.

use crate::components::{ICON_BUILDING, ICON_SHIELD, ICON_USERS};

pub const COMPANY: &str = "CrimeStoppers";
pub const TAGLINE: &str = "Trusted. Everyday. Everywhere.";

pub const PHONE_HREF: &str = "tel:+263773205674";
pub const PHONE_DISPLAY: &str = "+263 7732 0567 4";
pub const EMAIL: &str = "security@pamushanaafrica.com";
pub const MAILTO_HREF: &str =
    "mailto:security@pamushanaafrica.com?Subject=CrimeStoppers%20Information%20Request";
pub const ADDRESS: &str = "Pamushana House Number 1813 14th Road, Harare, Zimbabwe";
pub const MAP_HREF: &str = "https://maps.google.com/?q=1813 14th Road, Harare, Zimbabwe";

/// Anchor of the testimonials divider (not a navigation entry).
pub const TESTIMONIALS_ID: &str = "Testimonials";

/// Image file names, resolved against `SiteConfig::asset_base`.
pub mod images {
    pub const LOGO: &str = "logo.png";
    pub const LOGO_TRANSPARENT: &str = "logoTransparent.png";
    pub const LOGO_ONLY: &str = "logoOnly.png";
    pub const COVER: &str = "academy.jpg";
    pub const AVATAR: &str = "brown.jpg";
}

pub struct Statistic {
    /// SVG path data for [`crate::components::Icon`]
    pub icon: &'static str,
    pub value: u32,
    pub label: &'static str,
}

pub const STATISTICS: [Statistic; 3] = [
    Statistic {
        icon: ICON_USERS,
        value: 123,
        label: "Trained Personnel",
    },
    Statistic {
        icon: ICON_BUILDING,
        value: 40,
        label: "Protected Premises",
    },
    Statistic {
        icon: ICON_SHIELD,
        value: 96,
        label: "Crimes Stopped",
    },
];

pub struct Service {
    pub image: &'static str,
    pub title: &'static str,
    /// Shorter name used in the footer list
    pub link_text: &'static str,
    pub description: &'static str,
}

/// Service cards, laid out in rows of three.
pub const SERVICES: [Service; 6] = [
    Service {
        image: "propertySecurity.jpg",
        title: "Property Security",
        link_text: "Property Security",
        description: "Security for any building type",
    },
    Service {
        image: "bodyguard.jpg",
        title: "Private BodyGuard",
        link_text: "Private Bodyguard",
        description: "VVIP Security",
    },
    Service {
        image: "tracking.jpg",
        title: "Vehicle Tracking",
        link_text: "Vehicle Tracking",
        description: "Track your vehicle",
    },
    Service {
        image: "armored.png",
        title: "Secure Goods-In-Transit",
        link_text: "Secure Goods-In-Transit",
        description: "Move high value goods safely",
    },
    Service {
        image: "cctv.jpg",
        title: "CCTV Services",
        link_text: "CCTV Services",
        description: "24/7 monitored IP CCTV",
    },
    Service {
        image: "eventSecurity.jpg",
        title: "Events Security",
        link_text: "Events Security",
        description: "Make your events crime free",
    },
];

pub struct SelectOption {
    pub value: &'static str,
    pub text: &'static str,
}

pub const GENDER_OPTIONS: [SelectOption; 2] = [
    SelectOption {
        value: "male",
        text: "Male",
    },
    SelectOption {
        value: "female",
        text: "Female",
    },
];

pub const COMPANY_PITCH: &str = "From security guards to event security to alarm monitoring and \
    patrol, our security services company is the top choice for some of the biggest names in \
    the country. Get the security services you need, guaranteed. LOW RATES.NO CONTRACT.FREE QUOTE ";

pub const COMPANY_FUTURE: &str = "In today\u{2019}s day and age, we are reminded of the importance \
    of hiring a professional security guard company in order to keep people safe from threats or \
    terrorizing events. No person should be leaving their house headed toward a business or event \
    and hoping they make it home alive. Business owners these days are not only faced with running \
    a profitable business but they are also faced with keeping their customers and employees safe. \
    We work hard with business owners and event organizers to reduce the possibility of threats by \
    creating a custom defense plan for each and every possible scenario. These vulnerable events \
    require the knowledge, experience, and skill of one the top security guard agencies in Zimbabwe.";

pub const APPROACH: &str = "We are known as one of the top security service companies in the \
    country. We are bonded and insured and we guarantee to be the only professional security guard \
    services you need. We specialize in providing event security, mobile patrols, and alarm \
    monitoring to clients nationwide. Our armed and unarmed guards are available 24/7 for all your \
    business, personal, and special event needs. We are trusted by some of the biggest names in the \
    country and our security services are the most advanced in Zimbabwe. Don\u{2019}t let tragedy \
    happen and hire a professional security guard now.";

pub const TESTIMONIAL_HEADLINE: &str =
    "Professional Security wasn\u{2019}t Available\u{2026} So we fixed it";

pub const TESTIMONIAL_QUOTE: &str = "\u{201c}Customer service was great! There was someone at my \
    house the day after I called for a quote and three days later I was all set.\u{201d}";

pub const PLEDGE: &str = "\"To provide professional security in an insecure world\"";

pub const CLIENT_QUOTE: &str =
    "\"Our clients have peace of mind because we entrusted them to CrimeStoppers\"";
pub const CLIENT_NAME: &str = "Tendai";
pub const CLIENT_ROLE: &str = "Chief Financial Officer, Kurai Properties";

pub const CEO_NAME: &str = "Hardlife Chipika, CEO";
pub const CEO_QUOTE: &str = "\"Trust us with your business, We will guard you with ours. Our \
    business is protecting yours\"";
