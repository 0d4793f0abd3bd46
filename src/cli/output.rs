//! Output formatting utilities

use crate::domain::blog::plain_text;
use crate::domain::{Airline, BlogPost, Job};

/// One line per job: id, title, airline, location, contract
pub fn format_job_list(jobs: &[&Job]) -> String {
    if jobs.is_empty() {
        return "No jobs found".to_string();
    }

    let mut output = String::new();
    for job in jobs {
        output.push_str(&format!(
            "{:<10} {}  ({}, {})  {}\n",
            job.id, job.title, job.airline, job.location, job.contract_type
        ));
    }
    output
}

pub fn format_job(job: &Job) -> String {
    let mut output = format!("{}\n{}\n\n", job.title, "=".repeat(job.title.chars().count()));
    output.push_str(&format!("Airline:   {}\n", job.airline));
    output.push_str(&format!("Location:  {}\n", job.location));
    output.push_str(&format!("Contract:  {}\n", job.contract_type));
    output.push_str(&format!("Salary:    {}\n", job.salary));
    output.push_str(&format!("Deadline:  {}\n", job.deadline));
    output.push_str(&format!("Id:        {}\n", job.id));
    output.push_str(&format!("Slug:      {}\n", job.slug));

    if !job.description.is_empty() {
        output.push_str(&format!("\n{}\n", job.description));
    }
    push_section(&mut output, "Requirements", &job.requirements);
    push_section(&mut output, "Qualifications", &job.qualifications);
    push_section(&mut output, "Benefits", &job.benefits);
    if !job.how_to_apply.is_empty() {
        output.push_str(&format!("\nHow to apply:\n{}\n", job.how_to_apply));
    }
    output
}

pub fn format_airline_list(airlines: &[&Airline]) -> String {
    if airlines.is_empty() {
        return "No airlines found".to_string();
    }

    let mut output = String::new();
    for airline in airlines {
        output.push_str(&format!(
            "{:<10} {}  ({})  fleet {}\n",
            airline.id, airline.name, airline.headquarters, airline.fleet_size
        ));
    }
    output
}

pub fn format_airline(airline: &Airline) -> String {
    let mut output = format!(
        "{}\n{}\n\n",
        airline.name,
        "=".repeat(airline.name.chars().count())
    );
    output.push_str(&format!("Headquarters: {}\n", airline.headquarters));
    output.push_str(&format!("Founded:      {}\n", airline.year_founded));
    output.push_str(&format!("Fleet size:   {}\n", airline.fleet_size));
    output.push_str(&format!("Crew:         {}\n", airline.crew_count));
    output.push_str(&format!("Id:           {}\n", airline.id));
    output.push_str(&format!("Slug:         {}\n", airline.slug));
    push_section(&mut output, "Bases", &airline.base_locations);
    output
}

pub fn format_post_list(posts: &[&BlogPost]) -> String {
    if posts.is_empty() {
        return "No posts found".to_string();
    }

    let mut output = String::new();
    for post in posts {
        let date = post.date.get(..10).unwrap_or(&post.date);
        output.push_str(&format!("{}  {}  [{}]\n", date, post.title, post.slug));
    }
    output
}

pub fn format_post(post: &BlogPost) -> String {
    let mut output = format!("{}\n{}\n", post.title, "=".repeat(post.title.chars().count()));
    output.push_str(&format!("By {} on {}\n", post.author, post.date));
    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        output.push_str(&format!("{}\n", tags.join(" ")));
    }
    output.push_str(&format!("\n{}\n", plain_text(&post.content)));
    output
}

fn push_section(output: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    output.push_str(&format!("\n{}:\n", heading));
    for item in items {
        output.push_str(&format!("  • {}\n", item));
    }
}
