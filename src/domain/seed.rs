//! Seed collections used when nothing has been stored yet

use crate::domain::{Airline, BlogPost, Job};

/// Records a collection starts with before anything is persisted.
pub trait Seeded: Sized {
    fn seed() -> Vec<Self>;
}

impl Seeded for Job {
    fn seed() -> Vec<Self> {
        vec![Job {
            id: "1".to_string(),
            slug: "senior-cabin-crew".to_string(),
            title: "Senior Cabin Crew".to_string(),
            airline: "SkyWings Airlines".to_string(),
            location: "Dubai, UAE".to_string(),
            contract_type: "Full-time".to_string(),
            salary: "$45,000 - $65,000".to_string(),
            deadline: "2024-05-30".to_string(),
            logo_url: "https://api.dicebear.com/7.x/initials/svg?seed=SkyWings".to_string(),
            requirements: vec![
                "Minimum 3 years experience".to_string(),
                "Fluent in English".to_string(),
                "Height: 160-180cm".to_string(),
                "Excellent communication skills".to_string(),
            ],
            description: "Join our premium airline as a Senior Cabin Crew member. \
                Experience luxury service at its finest while traveling the world."
                .to_string(),
            qualifications: Vec::new(),
            benefits: Vec::new(),
            how_to_apply: String::new(),
        }]
    }
}

impl Seeded for Airline {
    fn seed() -> Vec<Self> {
        vec![
            Airline {
                id: "1".to_string(),
                name: "Virgin Atlantic".to_string(),
                slug: "virgin-atlantic".to_string(),
                logo: "https://api.dicebear.com/7.x/initials/svg?seed=VA".to_string(),
                headquarters: "Crawley, United Kingdom".to_string(),
                fleet_size: 37,
                year_founded: 1984,
                crew_count: 5500,
                base_locations: vec![
                    "London Heathrow".to_string(),
                    "London Gatwick".to_string(),
                    "Manchester".to_string(),
                ],
            },
            Airline {
                id: "2".to_string(),
                name: "Emirates".to_string(),
                slug: "emirates".to_string(),
                logo: "https://api.dicebear.com/7.x/initials/svg?seed=EM".to_string(),
                headquarters: "Dubai, UAE".to_string(),
                fleet_size: 262,
                year_founded: 1985,
                crew_count: 21000,
                base_locations: vec!["Dubai International".to_string()],
            },
        ]
    }
}

impl Seeded for BlogPost {
    fn seed() -> Vec<Self> {
        vec![BlogPost {
            id: "1".to_string(),
            title: "Top 10 Tips for Passing Your Cabin Crew Interview".to_string(),
            excerpt: "Master the art of cabin crew interviews with our expert tips...".to_string(),
            content: "<h2>Master the art of cabin crew interviews with our expert tips.</h2>\
                <p>From dress code to body language, learn everything you need to know \
                to succeed in your cabin crew interview.</p>\
                <ul><li>Research the airline thoroughly</li>\
                <li>Practice common interview questions</li>\
                <li>Dress professionally</li>\
                <li>Maintain positive body language</li>\
                <li>Prepare relevant examples</li></ul>"
                .to_string(),
            author: "Career Coach".to_string(),
            date: "2024-03-20".to_string(),
            tags: vec!["Interview Tips".to_string(), "Career Advice".to_string()],
            image_url: "https://images.unsplash.com/photo-1540555700478-4be289fbecef?w=800"
                .to_string(),
            slug: "top-10-tips-cabin-crew-interview".to_string(),
        }]
    }
}
