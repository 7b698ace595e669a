//! Sample catalog data.
//!
//! The site ships with a fixed set of records, defined here once and
//! treated as immutable everywhere else.

use super::{
    BlogPost, Course, Instructor, MonthlyStudy, PricingPlan, ProgressMetric, StatItem, Testimonial,
};

// =============================================================================
// Courses
// =============================================================================

/// Category facet values for the course catalog, wildcard first.
pub fn course_categories() -> Vec<&'static str> {
    vec![
        "All",
        "Web Development",
        "Data Science",
        "Marketing",
        "Design",
        "Security",
        "Mobile Development",
    ]
}

/// Level facet values, wildcard first.
pub fn course_levels() -> Vec<&'static str> {
    vec!["All", "Beginner", "Intermediate", "Advanced"]
}

/// The full course catalog.
pub fn courses() -> Vec<Course> {
    vec![
        Course {
            id: 1,
            title: "Full Stack Web Development".to_string(),
            instructor: "John Smith".to_string(),
            rating: 4.9,
            students: 2500,
            duration: "12 weeks".to_string(),
            price: 299,
            original_price: Some(399),
            level: "Intermediate".to_string(),
            category: "Web Development".to_string(),
            image: "https://images.pexels.com/photos/270348/pexels-photo-270348.jpeg".to_string(),
            description: "Master modern web development with React, Node.js, and MongoDB"
                .to_string(),
            features: vec![
                "React & Redux".to_string(),
                "Node.js & Express".to_string(),
                "MongoDB".to_string(),
                "Authentication".to_string(),
                "Deployment".to_string(),
            ],
        },
        Course {
            id: 2,
            title: "Data Science & Machine Learning".to_string(),
            instructor: "Sarah Johnson".to_string(),
            rating: 4.8,
            students: 1800,
            duration: "16 weeks".to_string(),
            price: 399,
            original_price: Some(499),
            level: "Advanced".to_string(),
            category: "Data Science".to_string(),
            image: "https://images.pexels.com/photos/590020/pexels-photo-590020.jpeg".to_string(),
            description: "Learn Python, TensorFlow, and advanced analytics techniques".to_string(),
            features: vec![
                "Python Programming".to_string(),
                "TensorFlow".to_string(),
                "Data Analysis".to_string(),
                "ML Algorithms".to_string(),
                "Deep Learning".to_string(),
            ],
        },
        Course {
            id: 3,
            title: "Digital Marketing Mastery".to_string(),
            instructor: "Mike Chen".to_string(),
            rating: 4.7,
            students: 3200,
            duration: "8 weeks".to_string(),
            price: 199,
            original_price: Some(299),
            level: "Beginner".to_string(),
            category: "Marketing".to_string(),
            image: "https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg".to_string(),
            description: "Complete guide to SEO, social media, and online advertising".to_string(),
            features: vec![
                "SEO Optimization".to_string(),
                "Social Media".to_string(),
                "Google Ads".to_string(),
                "Content Marketing".to_string(),
                "Analytics".to_string(),
            ],
        },
        Course {
            id: 4,
            title: "UI/UX Design Fundamentals".to_string(),
            instructor: "Emma Wilson".to_string(),
            rating: 4.9,
            students: 2100,
            duration: "10 weeks".to_string(),
            price: 249,
            original_price: Some(349),
            level: "Beginner".to_string(),
            category: "Design".to_string(),
            image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg".to_string(),
            description: "Create stunning user interfaces and exceptional user experiences"
                .to_string(),
            features: vec![
                "Design Principles".to_string(),
                "Figma".to_string(),
                "Prototyping".to_string(),
                "User Research".to_string(),
                "Wireframing".to_string(),
            ],
        },
        Course {
            id: 5,
            title: "Cybersecurity Essentials".to_string(),
            instructor: "Alex Rodriguez".to_string(),
            rating: 4.6,
            students: 1500,
            duration: "14 weeks".to_string(),
            price: 349,
            original_price: Some(449),
            level: "Intermediate".to_string(),
            category: "Security".to_string(),
            image:
                "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg"
                    .to_string(),
            description: "Protect systems and networks from cyber threats".to_string(),
            features: vec![
                "Network Security".to_string(),
                "Ethical Hacking".to_string(),
                "Risk Assessment".to_string(),
                "Incident Response".to_string(),
                "Compliance".to_string(),
            ],
        },
        Course {
            id: 6,
            title: "Mobile App Development".to_string(),
            instructor: "Lisa Park".to_string(),
            rating: 4.8,
            students: 1900,
            duration: "12 weeks".to_string(),
            price: 329,
            original_price: Some(429),
            level: "Intermediate".to_string(),
            category: "Mobile Development".to_string(),
            image:
                "https://images.pexels.com/photos/147413/twitter-facebook-together-exchange-of-information-147413.jpeg"
                    .to_string(),
            description: "Build native mobile apps for iOS and Android platforms".to_string(),
            features: vec![
                "React Native".to_string(),
                "Flutter".to_string(),
                "iOS Development".to_string(),
                "Android Development".to_string(),
                "App Store Deployment".to_string(),
            ],
        },
    ]
}

/// The four courses featured in the home-page carousel.
pub fn featured_courses() -> Vec<Course> {
    courses().into_iter().take(4).collect()
}

// =============================================================================
// Blog
// =============================================================================

/// Category facet values for the blog, wildcard first.
pub fn blog_categories() -> Vec<&'static str> {
    course_categories()
}

/// All published posts, newest first.
pub fn blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: 1,
            title: "The Future of Web Development: Trends to Watch in 2024".to_string(),
            excerpt: "Explore the latest trends shaping the web development landscape, from AI integration to progressive web apps.".to_string(),
            author: "Sarah Johnson".to_string(),
            date: "2024-01-15".to_string(),
            category: "Web Development".to_string(),
            image: "https://images.pexels.com/photos/270348/pexels-photo-270348.jpeg".to_string(),
            read_time: "5 min read".to_string(),
            tags: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "AI".to_string(),
                "PWA".to_string(),
            ],
        },
        BlogPost {
            id: 2,
            title: "Machine Learning for Beginners: A Complete Guide".to_string(),
            excerpt: "Start your journey into machine learning with this comprehensive guide covering fundamentals and practical applications.".to_string(),
            author: "Dr. Michael Chen".to_string(),
            date: "2024-01-12".to_string(),
            category: "Data Science".to_string(),
            image: "https://images.pexels.com/photos/590020/pexels-photo-590020.jpeg".to_string(),
            read_time: "8 min read".to_string(),
            tags: vec![
                "Python".to_string(),
                "ML".to_string(),
                "AI".to_string(),
                "Data Science".to_string(),
            ],
        },
        BlogPost {
            id: 3,
            title: "Digital Marketing Strategies That Actually Work".to_string(),
            excerpt: "Discover proven digital marketing strategies that drive real results for businesses of all sizes.".to_string(),
            author: "Emma Rodriguez".to_string(),
            date: "2024-01-10".to_string(),
            category: "Marketing".to_string(),
            image: "https://images.pexels.com/photos/265087/pexels-photo-265087.jpeg".to_string(),
            read_time: "6 min read".to_string(),
            tags: vec![
                "SEO".to_string(),
                "Social Media".to_string(),
                "Content Marketing".to_string(),
            ],
        },
        BlogPost {
            id: 4,
            title: "UI/UX Design Principles Every Designer Should Know".to_string(),
            excerpt: "Master the fundamental principles of user interface and user experience design to create exceptional digital products.".to_string(),
            author: "Alex Kim".to_string(),
            date: "2024-01-08".to_string(),
            category: "Design".to_string(),
            image: "https://images.pexels.com/photos/196644/pexels-photo-196644.jpeg".to_string(),
            read_time: "7 min read".to_string(),
            tags: vec![
                "UI".to_string(),
                "UX".to_string(),
                "Design".to_string(),
                "Figma".to_string(),
            ],
        },
        BlogPost {
            id: 5,
            title: "Cybersecurity Best Practices for Remote Work".to_string(),
            excerpt: "Essential cybersecurity measures to protect your data and systems while working remotely.".to_string(),
            author: "James Wilson".to_string(),
            date: "2024-01-05".to_string(),
            category: "Security".to_string(),
            image:
                "https://images.pexels.com/photos/60504/security-protection-anti-virus-software-60504.jpeg"
                    .to_string(),
            read_time: "4 min read".to_string(),
            tags: vec![
                "Security".to_string(),
                "Remote Work".to_string(),
                "VPN".to_string(),
            ],
        },
        BlogPost {
            id: 6,
            title: "Mobile App Development: Native vs Cross-Platform".to_string(),
            excerpt: "Compare native and cross-platform development approaches to choose the best strategy for your mobile app.".to_string(),
            author: "Lisa Park".to_string(),
            date: "2024-01-03".to_string(),
            category: "Mobile Development".to_string(),
            image:
                "https://images.pexels.com/photos/147413/twitter-facebook-together-exchange-of-information-147413.jpeg"
                    .to_string(),
            read_time: "6 min read".to_string(),
            tags: vec![
                "React Native".to_string(),
                "Flutter".to_string(),
                "iOS".to_string(),
                "Android".to_string(),
            ],
        },
    ]
}

// =============================================================================
// Instructors
// =============================================================================

/// The instructor directory.
pub fn instructors() -> Vec<Instructor> {
    vec![
        Instructor {
            id: 1,
            name: "Dr. Sarah Johnson".to_string(),
            title: "Senior Full Stack Developer".to_string(),
            specialization: "Web Development & Data Science".to_string(),
            image: "https://images.pexels.com/photos/3763188/pexels-photo-3763188.jpeg".to_string(),
            rating: 4.9,
            students: 15000,
            courses: 12,
            experience: "10+ years".to_string(),
            bio: "Former MIT professor and Google engineer with extensive experience in full-stack development and machine learning. Passionate about making complex concepts accessible to everyone.".to_string(),
            skills: vec![
                "JavaScript".to_string(),
                "Python".to_string(),
                "React".to_string(),
                "Node.js".to_string(),
                "TensorFlow".to_string(),
                "AWS".to_string(),
            ],
        },
        Instructor {
            id: 2,
            name: "Michael Chen".to_string(),
            title: "Lead Data Scientist".to_string(),
            specialization: "Machine Learning & AI".to_string(),
            image: "https://images.pexels.com/photos/3785079/pexels-photo-3785079.jpeg".to_string(),
            rating: 4.8,
            students: 12000,
            courses: 8,
            experience: "8+ years".to_string(),
            bio: "Ex-Facebook data scientist specializing in machine learning and artificial intelligence. Published researcher with 50+ papers in top-tier conferences.".to_string(),
            skills: vec![
                "Python".to_string(),
                "TensorFlow".to_string(),
                "PyTorch".to_string(),
                "Scikit-learn".to_string(),
                "SQL".to_string(),
                "Docker".to_string(),
            ],
        },
        Instructor {
            id: 3,
            name: "Emma Rodriguez".to_string(),
            title: "Digital Marketing Expert".to_string(),
            specialization: "SEO & Content Marketing".to_string(),
            image: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg".to_string(),
            rating: 4.7,
            students: 18000,
            courses: 15,
            experience: "12+ years".to_string(),
            bio: "Award-winning digital marketer who has helped 500+ businesses grow their online presence. Expert in SEO, content marketing, and social media strategy.".to_string(),
            skills: vec![
                "SEO".to_string(),
                "Google Ads".to_string(),
                "Content Marketing".to_string(),
                "Social Media".to_string(),
                "Analytics".to_string(),
                "Email Marketing".to_string(),
            ],
        },
        Instructor {
            id: 4,
            name: "Alex Kim".to_string(),
            title: "Senior UX Designer".to_string(),
            specialization: "UI/UX Design".to_string(),
            image: "https://images.pexels.com/photos/3778876/pexels-photo-3778876.jpeg".to_string(),
            rating: 4.9,
            students: 10000,
            courses: 6,
            experience: "7+ years".to_string(),
            bio: "Design lead at top tech companies including Apple and Airbnb. Specializes in user-centered design and has won multiple design awards.".to_string(),
            skills: vec![
                "Figma".to_string(),
                "Sketch".to_string(),
                "Adobe XD".to_string(),
                "Prototyping".to_string(),
                "User Research".to_string(),
                "Design Systems".to_string(),
            ],
        },
        Instructor {
            id: 5,
            name: "James Wilson".to_string(),
            title: "Cybersecurity Specialist".to_string(),
            specialization: "Information Security".to_string(),
            image: "https://images.pexels.com/photos/3760263/pexels-photo-3760263.jpeg".to_string(),
            rating: 4.8,
            students: 8000,
            courses: 10,
            experience: "15+ years".to_string(),
            bio: "Former NSA cybersecurity analyst with extensive experience in penetration testing, incident response, and security architecture.".to_string(),
            skills: vec![
                "Ethical Hacking".to_string(),
                "Network Security".to_string(),
                "Incident Response".to_string(),
                "Risk Assessment".to_string(),
                "Compliance".to_string(),
                "Forensics".to_string(),
            ],
        },
        Instructor {
            id: 6,
            name: "Lisa Park".to_string(),
            title: "Mobile App Developer".to_string(),
            specialization: "iOS & Android Development".to_string(),
            image: "https://images.pexels.com/photos/3756679/pexels-photo-3756679.jpeg".to_string(),
            rating: 4.9,
            students: 9500,
            courses: 9,
            experience: "9+ years".to_string(),
            bio: "Senior mobile developer who has built apps with millions of downloads. Expert in both native and cross-platform development.".to_string(),
            skills: vec![
                "React Native".to_string(),
                "Flutter".to_string(),
                "Swift".to_string(),
                "Kotlin".to_string(),
                "Firebase".to_string(),
                "App Store Optimization".to_string(),
            ],
        },
    ]
}

// =============================================================================
// Pricing
// =============================================================================

/// The three subscription tiers.
pub fn pricing_plans() -> Vec<PricingPlan> {
    vec![
        PricingPlan {
            id: "basic".to_string(),
            name: "Basic".to_string(),
            price: 29,
            original_price: None,
            period: "month".to_string(),
            description: "Perfect for beginners starting their learning journey".to_string(),
            features: vec![
                "Access to 50+ courses".to_string(),
                "Basic video quality (720p)".to_string(),
                "Community forum access".to_string(),
                "Mobile app access".to_string(),
                "Basic progress tracking".to_string(),
                "Email support".to_string(),
            ],
            not_included: vec![
                "Certificates".to_string(),
                "Live sessions".to_string(),
                "Priority support".to_string(),
                "Downloadable content".to_string(),
            ],
            popular: false,
        },
        PricingPlan {
            id: "pro".to_string(),
            name: "Professional".to_string(),
            price: 59,
            original_price: Some(79),
            period: "month".to_string(),
            description: "Most popular choice for serious learners".to_string(),
            features: vec![
                "Access to 200+ courses".to_string(),
                "HD video quality (1080p)".to_string(),
                "Community forum access".to_string(),
                "Mobile app access".to_string(),
                "Advanced progress tracking".to_string(),
                "Certificates of completion".to_string(),
                "Live Q&A sessions".to_string(),
                "Priority email support".to_string(),
                "Downloadable resources".to_string(),
            ],
            not_included: vec![
                "1-on-1 mentoring".to_string(),
                "Custom learning paths".to_string(),
            ],
            popular: true,
        },
        PricingPlan {
            id: "enterprise".to_string(),
            name: "Enterprise".to_string(),
            price: 99,
            original_price: Some(129),
            period: "month".to_string(),
            description: "Complete solution for professionals and teams".to_string(),
            features: vec![
                "Access to all 500+ courses".to_string(),
                "4K video quality".to_string(),
                "Community forum access".to_string(),
                "Mobile app access".to_string(),
                "Advanced analytics".to_string(),
                "Certificates of completion".to_string(),
                "Live Q&A sessions".to_string(),
                "1-on-1 mentoring sessions".to_string(),
                "Custom learning paths".to_string(),
                "Team management tools".to_string(),
                "Priority phone support".to_string(),
                "Downloadable resources".to_string(),
                "API access".to_string(),
            ],
            not_included: Vec::new(),
            popular: false,
        },
    ]
}

// =============================================================================
// Testimonials
// =============================================================================

/// Student success stories for the home-page rotator.
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: 1,
            name: "Alex Rodriguez".to_string(),
            role: "Full Stack Developer".to_string(),
            company: "TechCorp".to_string(),
            content: "EduMaster transformed my career. The courses are incredibly well-structured, and the instructors are industry experts. I landed my dream job within 3 months!".to_string(),
            rating: 5,
            avatar: "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg".to_string(),
        },
        Testimonial {
            id: 2,
            name: "Maria Santos".to_string(),
            role: "Data Scientist".to_string(),
            company: "DataTech Solutions".to_string(),
            content: "The machine learning course exceeded my expectations. The hands-on projects and real-world applications made complex concepts easy to understand.".to_string(),
            rating: 5,
            avatar: "https://images.pexels.com/photos/3763188/pexels-photo-3763188.jpeg".to_string(),
        },
        Testimonial {
            id: 3,
            name: "David Kim".to_string(),
            role: "UX Designer".to_string(),
            company: "Creative Studio".to_string(),
            content: "Outstanding quality and support! The design fundamentals course helped me transition from development to design seamlessly. Highly recommended!".to_string(),
            rating: 5,
            avatar: "https://images.pexels.com/photos/3785079/pexels-photo-3785079.jpeg".to_string(),
        },
    ]
}

// =============================================================================
// Display metrics
// =============================================================================

/// Home-page headline statistics.
pub fn site_stats() -> Vec<StatItem> {
    vec![
        StatItem {
            label: "Students Enrolled".to_string(),
            value: 15000,
            suffix: "+".to_string(),
        },
        StatItem {
            label: "Courses Available".to_string(),
            value: 750,
            suffix: "+".to_string(),
        },
        StatItem {
            label: "Success Rate".to_string(),
            value: 95,
            suffix: "%".to_string(),
        },
        StatItem {
            label: "Expert Instructors".to_string(),
            value: 200,
            suffix: "+".to_string(),
        },
    ]
}

/// Dashboard progress bars.
pub fn progress_overview() -> Vec<ProgressMetric> {
    vec![
        ProgressMetric {
            label: "Courses Completed".to_string(),
            value: 8,
            max_value: 12,
        },
        ProgressMetric {
            label: "Hours Studied".to_string(),
            value: 156,
            max_value: 200,
        },
        ProgressMetric {
            label: "Assignments Done".to_string(),
            value: 24,
            max_value: 30,
        },
        ProgressMetric {
            label: "Certificates Earned".to_string(),
            value: 3,
            max_value: 5,
        },
    ]
}

/// Dashboard counter tiles.
pub fn dashboard_stats() -> Vec<StatItem> {
    vec![
        StatItem {
            label: "Active Courses".to_string(),
            value: 4,
            suffix: String::new(),
        },
        StatItem {
            label: "Study Streak".to_string(),
            value: 15,
            suffix: " days".to_string(),
        },
        StatItem {
            label: "Goals Achieved".to_string(),
            value: 7,
            suffix: "/10".to_string(),
        },
        StatItem {
            label: "Skill Level".to_string(),
            value: 85,
            suffix: "%".to_string(),
        },
    ]
}

/// Monthly study-hours chart, January through June.
pub fn study_hours() -> Vec<MonthlyStudy> {
    vec![
        MonthlyStudy {
            month: "Jan".to_string(),
            courses: 2,
            hours: 40,
        },
        MonthlyStudy {
            month: "Feb".to_string(),
            courses: 3,
            hours: 55,
        },
        MonthlyStudy {
            month: "Mar".to_string(),
            courses: 1,
            hours: 25,
        },
        MonthlyStudy {
            month: "Apr".to_string(),
            courses: 4,
            hours: 70,
        },
        MonthlyStudy {
            month: "May".to_string(),
            courses: 2,
            hours: 45,
        },
        MonthlyStudy {
            month: "Jun".to_string(),
            courses: 3,
            hours: 60,
        },
    ]
}

/// Status lines the boot loader cycles through.
pub fn loader_messages() -> Vec<&'static str> {
    vec![
        "Loading courses...",
        "Preparing content...",
        "Initializing features...",
        "Almost ready...",
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(courses().len(), 6);
        assert_eq!(blog_posts().len(), 6);
        assert_eq!(instructors().len(), 6);
        assert_eq!(pricing_plans().len(), 3);
        assert_eq!(testimonials().len(), 3);
        assert_eq!(loader_messages().len(), 4);
    }

    #[test]
    fn test_featured_is_leading_slice() {
        let featured = featured_courses();
        assert_eq!(featured.len(), 4);
        assert_eq!(featured[0].id, 1);
        assert_eq!(featured[3].id, 4);
    }

    #[test]
    fn test_every_course_category_is_a_facet() {
        let facets = course_categories();
        for course in courses() {
            assert!(facets.contains(&course.category.as_str()));
        }
    }

    #[test]
    fn test_every_course_level_is_a_facet() {
        let facets = course_levels();
        for course in courses() {
            assert!(facets.contains(&course.level.as_str()));
        }
    }

    #[test]
    fn test_exactly_one_popular_plan() {
        let popular: Vec<PricingPlan> =
            pricing_plans().into_iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].id, "pro");
    }
}
