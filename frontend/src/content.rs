//! Static marketing copy.

use crate::types::{FeatureItem, NavLink, Slide, Testimonial};

pub static NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Marketplace",
        href: "/marketplace",
        primary: false,
    },
    NavLink {
        label: "For Creators",
        href: "/creators",
        primary: false,
    },
    NavLink {
        label: "About",
        href: "/about",
        primary: false,
    },
    NavLink {
        label: "Get Started",
        href: "/get-started",
        primary: true,
    },
];

pub static SLIDES: [Slide; 4] = [
    Slide {
        image: "/cta1.png",
        category: "Engineering",
    },
    Slide {
        image: "/cta2.png",
        category: "Research",
    },
    Slide {
        image: "/cta3.png",
        category: "Design",
    },
    Slide {
        image: "/cta4.png",
        category: "Thesis",
    },
];

/// Highlights under the hero headline.
pub static HERO_HIGHLIGHTS: [FeatureItem; 3] = [
    FeatureItem {
        title: "Expert Guidance",
        description: "Top professionals",
        icon: "🎓",
    },
    FeatureItem {
        title: "Fast Turnaround",
        description: "On-time delivery",
        icon: "⚡",
    },
    FeatureItem {
        title: "Quality",
        description: "Rigorous checks",
        icon: "🔍",
    },
];

pub static FEATURES: [FeatureItem; 4] = [
    FeatureItem {
        title: "Expert Creators",
        description: "Verified professionals in your field of study",
        icon: "👨‍🎓",
    },
    FeatureItem {
        title: "Custom Projects",
        description: "Tailored to your exact requirements",
        icon: "🛠️",
    },
    FeatureItem {
        title: "Secure Payments",
        description: "Escrow system ensures safety",
        icon: "🔒",
    },
    FeatureItem {
        title: "Fast Delivery",
        description: "Never miss a deadline again",
        icon: "⚡",
    },
];

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "I found a creator for my final-year robotics project in a day. The escrow made the whole thing stress-free.",
        author: "Amara O.",
        role: "Mechanical Engineering student",
    },
    Testimonial {
        quote: "Clear milestones, honest feedback and delivery two days before my deadline.",
        author: "Daniel K.",
        role: "MSc Data Science",
    },
    Testimonial {
        quote: "As a creator I get projects that actually match my research background.",
        author: "Dr. Priya S.",
        role: "Verified creator",
    },
];

/// Caption shown over the `index`-th slide.
pub fn slide_caption(index: usize) -> String {
    format!("Project Example {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_has_four_distinct_slides() {
        assert_eq!(SLIDES.len(), 4);
        for (i, a) in SLIDES.iter().enumerate() {
            for b in &SLIDES[i + 1..] {
                assert_ne!(a.image, b.image);
            }
        }
    }

    #[test]
    fn test_slide_captions_are_one_based() {
        assert_eq!(slide_caption(0), "Project Example 1");
        assert_eq!(slide_caption(3), "Project Example 4");
    }

    #[test]
    fn test_single_primary_nav_link() {
        let primary: Vec<_> = NAV_LINKS.iter().filter(|l| l.primary).collect();
        assert_eq!(primary.len(), 1);
        assert_eq!(primary[0].href, "/get-started");
        assert!(NAV_LINKS.iter().all(|l| l.href.starts_with('/')));
    }

    #[test]
    fn test_feature_grid_has_four_entries() {
        assert_eq!(FEATURES.len(), 4);
        assert!(FEATURES.iter().all(|f| !f.title.is_empty() && !f.icon.is_empty()));
    }
}
