//! Canned text blocks for fallback reports.

use crate::classify::Category;

pub const DEFAULT_PERSONA: &str = "Early adopters and professionals who are looking for innovative \
solutions to everyday problems. They are willing to try new products and provide feedback to help \
improve the service.";

/// Persona block for a category; categories without one get the default.
pub fn persona(category: Category) -> &'static str {
    match category {
        Category::Healthcare => {
            "Health-conscious individuals aged 25-45 who actively track their wellness goals and \
             are willing to invest in preventive healthcare solutions. They are tech-savvy, have \
             disposable income, and prioritize convenience in managing their health routines."
        }
        Category::Fintech => {
            "Young professionals and millennials aged 22-40 who are digitally native and seek \
             modern financial solutions. They value transparency, low fees, and mobile-first \
             experiences for managing their money and investments."
        }
        Category::Education => {
            "Lifelong learners, students, and professionals aged 18-50 who are motivated to \
             acquire new skills for career advancement. They prefer flexible, self-paced learning \
             and are comfortable with digital platforms."
        }
        Category::MobileApp => {
            "Tech-savvy millennials and Gen Z users aged 25-40 who are comfortable with mobile \
             technology and seek convenient, on-demand solutions. They value efficiency, \
             user-friendly interfaces, and are willing to pay for services that save them time."
        }
        Category::Saas => {
            "Small to medium business owners and entrepreneurs who need scalable solutions to \
             streamline their operations. They are budget-conscious but understand the value of \
             investing in tools that improve productivity and ROI."
        }
        Category::Ai | Category::Ecommerce => DEFAULT_PERSONA,
    }
}

pub const DEFAULT_PAIN_POINTS: &[&str] = &[
    "Current solutions are too expensive or complex for average users",
    "Lack of integration between different tools and platforms",
    "Time-consuming manual processes that could be automated",
    "Poor user experience with existing alternatives in the market",
];

pub fn pain_points(category: Category) -> Option<&'static [&'static str]> {
    match category {
        Category::Ai => Some(&[
            "Manual processes are time-consuming and prone to human error",
            "Lack of personalized solutions that adapt to individual needs",
            "Difficulty in processing and analyzing large amounts of data efficiently",
            "Need for 24/7 availability that human resources cannot provide cost-effectively",
        ]),
        Category::Healthcare => Some(&[
            "Difficulty tracking and maintaining consistent health habits",
            "Limited access to personalized healthcare guidance",
            "Fragmented health data across multiple platforms and devices",
            "High costs of traditional healthcare and wellness services",
        ]),
        Category::Fintech => Some(&[
            "Complex and outdated traditional banking interfaces",
            "High fees and hidden charges from financial institutions",
            "Lack of transparency in financial products and services",
            "Difficulty in managing and tracking multiple financial goals",
        ]),
        Category::Ecommerce => Some(&[
            "Complicated checkout processes leading to cart abandonment",
            "Lack of personalized shopping experiences and recommendations",
            "Difficulty in finding products that match specific needs and preferences",
            "Poor customer service and limited post-purchase support",
        ]),
        _ => None,
    }
}

pub const DEFAULT_COMPETITORS: &[&str] = &[
    "Direct competitors in the same niche",
    "Indirect solutions addressing similar problems",
    "Traditional methods and manual processes",
    "Larger enterprise platforms",
    "Free or open-source alternatives",
];

pub fn competitors(category: Category) -> Option<&'static [&'static str]> {
    match category {
        Category::MobileApp => Some(&[
            "Similar mobile apps in app stores",
            "Web-based alternatives",
            "Traditional service providers",
            "DIY solutions and manual methods",
            "Enterprise software solutions",
        ]),
        Category::Saas => Some(&[
            "Established SaaS platforms",
            "Custom enterprise solutions",
            "Open-source alternatives",
            "Traditional desktop software",
            "Manual processes and spreadsheets",
        ]),
        Category::Healthcare => Some(&[
            "Traditional healthcare providers",
            "Existing fitness and wellness apps",
            "Wearable device ecosystems",
            "Telehealth platforms",
            "Manual tracking methods",
        ]),
        Category::Fintech => Some(&[
            "Traditional banks and credit unions",
            "Existing fintech apps",
            "Investment platforms",
            "Financial advisors",
            "Manual financial management",
        ]),
        _ => None,
    }
}

pub const DEFAULT_MVP_FEATURES: &[&str] = &[
    "User account creation and basic profile setup",
    "Core feature that delivers the main value proposition",
    "Clean and responsive user interface design",
    "Basic reporting and analytics capabilities",
    "Essential third-party integrations for functionality",
];

pub fn mvp_features(category: Category) -> Option<&'static [&'static str]> {
    match category {
        Category::MobileApp => Some(&[
            "User registration and secure profile management",
            "Core functionality that solves the primary problem",
            "Simple and intuitive mobile-first user interface",
            "Basic analytics and user feedback collection system",
            "Essential integrations with popular third-party services",
        ]),
        Category::Saas => Some(&[
            "User authentication and role-based access control",
            "Primary feature that addresses the core business problem",
            "Dashboard with key metrics and actionable insights",
            "Basic customer support and help documentation",
            "Simple onboarding flow and tutorial system",
        ]),
        _ => None,
    }
}

pub const LAUNCH_ADVICE: &[&str] = &[
    "Start with a small, focused target audience to validate your concept and gather initial user feedback",
    "Build a minimum viable product (MVP) with only essential features to test market demand quickly and cost-effectively",
    "Leverage social media and content marketing to build brand awareness and attract early adopters organically",
    "Implement user feedback loops early to continuously improve your product based on real user needs and pain points",
];
