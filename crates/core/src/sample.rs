//! Bundled sample catalog for consumers that cannot reach the service.
//!
//! The records use the same [`Project`] shape as discovered ones so a
//! renderer does not need to know where its data came from.

use crate::catalog::Catalog;
use crate::project::Project;

fn sample_project(name: &str, owner: &str, address: &str, review: &str, folder: &str) -> Project {
    Project {
        name: name.to_string(),
        owner: owner.to_string(),
        address: address.to_string(),
        review: review.to_string(),
        images: Vec::new(),
        folder: folder.to_string(),
    }
}

/// One sample project per category, without images.
pub fn sample_catalog() -> Catalog {
    Catalog {
        completed: vec![sample_project(
            "Luxury Villa - Green Gardens",
            "Mr. Ramesh Kumar",
            "45, Green Gardens Layout, Whitefield, Bangalore - 560066",
            "Shivatanaya Constructions exceeded our expectations! The attention to detail and \
             quality of construction is outstanding. VinodKumar and his team were professional \
             throughout the entire process. Our dream home became a reality thanks to them. \
             Highly recommended for anyone looking for quality construction in Bangalore!",
            "Sample_Luxury_Villa",
        )],
        ongoing: vec![sample_project(
            "Contemporary 3BHK Home",
            "Mrs. Priya Sharma",
            "78, Sarjapur Road Extension, Electronic City, Bangalore - 560100",
            "Construction is progressing smoothly and we're impressed with the regular updates \
             from the team. Can't wait to see our finished home!",
            "Sample_Modern_Home",
        )],
        upcoming: vec![sample_project(
            "Tech Park Commercial Complex",
            "Innovate Solutions Pvt Ltd",
            "Plot 23, Outer Ring Road, Marathahalli, Bangalore - 560037",
            "We chose Shivatanaya Constructions for their excellent reputation and competitive \
             pricing. Looking forward to the construction phase!",
            "Sample_Commercial_Complex",
        )],
    }
}
