//! Static lookup tables for synthesized identities, campaigns and reviewers.
//!
//! Repeated entries are intentional: they weight the draw toward common names.

use crate::stream::DeterministicStream;

/// Draw one entry from a static pool. Empty pools yield `""` without a draw.
pub(crate) fn draw(stream: &mut DeterministicStream, pool: &[&'static str]) -> &'static str {
    stream.pick(pool).copied().unwrap_or_default()
}

/// Given names.
pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "John", "Patricia", "Robert", "Jennifer", "Michael", "Linda", "William",
    "Elizabeth", "David", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Christopher", "Nancy", "Daniel", "Lisa", "Matthew", "Betty", "Anthony",
    "Margaret", "Mark", "Sandra", "Donald", "Ashley", "Steven", "Kimberly", "Paul", "Emily",
    "Andrew", "Donna", "Joshua", "Michelle", "Kenneth", "Dorothy", "Kevin", "Carol", "Brian",
    "Amanda", "George", "Melissa", "Edward", "Deborah", "Ronald", "Stephanie", "Timothy",
    "Rebecca", "Jason", "Sharon", "Jeffrey", "Laura", "Ryan", "Cynthia", "Jacob", "Kathleen",
    "Gary", "Amy", "Nicholas", "Shirley", "Eric", "Angela", "Jonathan", "Helen", "Stephen",
    "Anna", "Larry", "Brenda", "Justin", "Pamela", "Scott", "Nicole", "Brandon", "Emma",
    "Benjamin", "Samantha", "Samuel", "Katherine", "Raymond", "Christine", "Gregory", "Debra",
    "Frank", "Rachel", "Alexander", "Catherine", "Patrick", "Carolyn", "Raymond", "Janet",
    "Jack", "Ruth", "Dennis", "Maria", "Jerry", "Heather", "Tyler", "Diane", "Aaron",
    "Virginia", "Jose", "Julie", "Adam", "Joyce", "Henry", "Victoria", "Nathan", "Olivia",
    "Douglas", "Kelly", "Zachary", "Christina", "Peter", "Lauren", "Kyle", "Joan", "Walter",
    "Evelyn", "Ethan", "Judith", "Jeremy", "Megan", "Harold", "Cheryl", "Keith", "Andrea",
    "Christian", "Hannah", "Roger", "Martha", "Noah", "Jacqueline", "Gerald", "Frances", "Carl",
    "Gloria", "Terry", "Ann", "Sean", "Teresa", "Austin", "Kathryn", "Arthur", "Sara",
    "Lawrence", "Janice", "Jesse", "Jean", "Dylan", "Alice", "Bryan", "Madison", "Joe", "Doris",
    "Jordan", "Abigail", "Billy", "Julia", "Bruce", "Judy", "Albert", "Grace", "Willie",
    "Denise", "Gabriel", "Amber", "Logan", "Brittany", "Alan", "Danielle", "Juan", "Rose",
    "Wayne", "Diana", "Roy", "Natalie", "Ralph", "Sophia", "Randy", "Alexis", "Eugene", "Lori",
    "Vincent", "Kayla", "Russell", "Jane", "Elijah", "Eleanor", "Louis", "Marilyn", "Philip",
    "Beverly", "Bobby", "Amber", "Johnny", "Danielle", "Bradley", "Theresa", "Antonio", "Sofia",
    "Phillip", "Diana", "Carlos", "Janice", "Mason", "Isabella", "Lucas", "Mia", "Liam",
    "Charlotte", "Oliver", "Amelia", "Elijah", "Ava", "Logan", "Harper", "Aiden", "Ella",
    "Jackson", "Aria", "Sebastian", "Scarlett", "Carter", "Chloe", "Jayden", "Grace", "Connor",
    "Lily", "Owen", "Zoe", "Caleb", "Penelope", "Isaac", "Nora", "Cameron", "Riley", "Evan",
    "Addison", "Landon", "Layla", "Hunter", "Lillian", "Adrian", "Natalie", "Wyatt", "Camila",
    "Dominic", "Savannah", "Xavier", "Brooklyn", "Jaxon", "Leah", "Julian", "Aubrey", "Levi",
    "Stella", "Isaiah", "Aurora", "Eli", "Skylar", "Aaron", "Bella", "Ian", "Claire", "Colton",
    "Paisley", "Nolan", "Everly", "Gavin", "Anna", "Chase", "Caroline", "Leo", "Nova",
    "Lincoln", "Genesis", "Blake", "Emilia", "Sawyer", "Kennedy", "Easton", "Maya", "Bennett",
    "Willow", "Miles", "Kinsley", "Micah", "Naomi", "Damian", "Aaliyah", "Maxwell", "Elena",
    "Tristan", "Sarah", "Wesley", "Ariana", "Cole", "Allison", "Axel", "Gabriella", "Brody",
    "Alice", "Dean", "Madelyn", "Wei", "Priya", "Mohammed", "Fatima", "Carlos", "Ana", "Ahmed",
    "Aisha", "Chen", "Yuki", "Raj", "Sanaa", "Omar", "Zara", "Hassan", "Laila", "Ali", "Yasmin",
    "Ibrahim", "Noor", "Kai", "Mei", "Jun", "Sakura", "Hiroshi", "Akiko", "Ravi", "Ananya",
    "Arjun", "Diya", "Jorge", "Lucia", "Diego", "Carmen", "Pablo", "Rosa", "Miguel", "Elena",
    "Luis", "Isabel",
];

/// Family names.
pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans",
    "Turner", "Diaz", "Parker", "Cruz", "Edwards", "Collins", "Reyes", "Stewart", "Morris",
    "Morales", "Murphy", "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan", "Cooper", "Peterson",
    "Bailey", "Reed", "Kelly", "Howard", "Ramos", "Kim", "Cox", "Ward", "Richardson", "Watson",
    "Brooks", "Chavez", "Wood", "James", "Bennett", "Gray", "Mendoza", "Ruiz", "Hughes",
    "Price", "Alvarez", "Castillo", "Sanders", "Patel", "Myers", "Long", "Ross", "Foster",
    "Jimenez", "Powell", "Jenkins", "Perry", "Russell", "Sullivan", "Bell", "Coleman", "Butler",
    "Henderson", "Barnes", "Gonzales", "Fisher", "Vasquez", "Simmons", "Romero", "Jordan",
    "Patterson", "Alexander", "Hamilton", "Graham", "Reynolds", "Griffin", "Wallace", "Moreno",
    "West", "Cole", "Hayes", "Bryant", "Herrera", "Gibson", "Ellis", "Tran", "Medina",
    "Aguilar", "Stevens", "Murray", "Ford", "Castro", "Marshall", "Owens", "Harrison",
    "Fernandez", "McDonald", "Woods", "Washington", "Kennedy", "Wells", "Vargas", "Henry",
    "Chen", "Freeman", "Webb", "Tucker", "Guzman", "Burns", "Crawford", "Olson", "Simpson",
    "Porter", "Hunter", "Gordon", "Mendez", "Silva", "Shaw", "Snyder", "Mason", "Dixon",
    "Munoz", "Hunt", "Hicks", "Holmes", "Palmer", "Wagner", "Black", "Robertson", "Boyd",
    "Rose", "Stone", "Salazar", "Fox", "Warren", "Mills", "Meyer", "Rice", "Schmidt", "Garza",
    "Daniels", "Ferguson", "Nichols", "Stephens", "Soto", "Weaver", "Ryan", "Gardner", "Payne",
    "Grant", "Dunn", "Kelley", "Spencer", "Hawkins", "Arnold", "Pierce", "Vazquez", "Hansen",
    "Peters", "Santos", "Hart", "Bradley", "Knight", "Elliott", "Cunningham", "Duncan",
    "Armstrong", "Hudson", "Carroll", "Lane", "Riley", "Andrews", "Alvarado", "Ray", "Delgado",
    "Berry", "Perkins", "Hoffman", "Johnston", "Matthews", "Pena", "Richards", "Contreras",
    "Willis", "Carpenter", "Lawrence", "Sandoval", "Guerrero", "George", "Chapman", "Rios",
    "Estrada", "Ortega", "Watkins", "Greene", "Nunez", "Wheeler", "Valdez", "Harper", "Burke",
    "Larson", "Santiago", "Maldonado", "Morrison", "McCrainey", "Byram", "Rees", "Kerns",
    "Mustard", "Atkins", "Bullock", "Lang", "Turpen", "Duffey", "Munger", "Sygman", "Guastello",
    "Beckwith", "Luther", "Petersen", "Grace", "Shackelford", "Gasper", "Oursler", "Bierbaum",
    "Carver", "Niebylski", "Flagler", "Sweeney", "Schottman", "Sinclair", "Paladugu",
];

/// Job titles assigned to employees.
pub const JOB_TITLES: &[&str] = &[
    "Software Engineer", "Senior Software Engineer", "Lead Software Engineer",
    "Principal Engineer", "Product Manager", "Senior Product Manager", "Director of Product",
    "VP of Product", "Data Analyst", "Senior Data Analyst", "Data Scientist",
    "Lead Data Scientist", "Business Analyst", "Senior Business Analyst", "Program Manager",
    "Project Manager", "DevOps Engineer", "Site Reliability Engineer", "Security Engineer",
    "Network Engineer", "Sales Representative", "Account Executive", "Sales Manager",
    "Director of Sales", "Marketing Specialist", "Marketing Manager", "Director of Marketing",
    "VP of Marketing", "Financial Analyst", "Senior Financial Analyst", "Finance Manager",
    "Controller", "HR Specialist", "HR Business Partner", "HR Manager", "Director of HR",
    "Operations Manager", "Operations Analyst", "VP of Operations", "COO", "Compliance Officer",
    "Risk Analyst", "Audit Manager", "Director of Compliance", "Customer Success Manager",
    "Support Engineer", "Technical Writer", "QA Engineer",
];

/// Departments used by quarterly campaign names.
pub const DEPARTMENTS: &[&str] = &[
    "Sales, Product, and Customer Experience", "Technology and Digital Transformation",
    "Financial Services Group", "Human Resources", "Office of the CEO",
    "Innovation and Service Delivery", "Strategic Healthcare Solutions",
    "Audit, Compliance, Risk Management", "Cobalt Health Solutions",
];

/// Review groups used by quarterly campaign names.
pub const GROUPS: &[&str] = &["A", "B", "C"];

/// Source systems a record can originate from.
pub const SOURCES: &[&str] = &["sailpoint_identitynow"];

/// Reviewers that receive reassigned certifications.
pub const COMMON_REVIEWERS: &[&str] = &[
    "Kim White",
    "Denise Lawson",
    "Melissa Jackson",
    "Lorraine Groves",
    "Teresa Beatty",
    "Kesha King",
];

// ============================================================================
// Campaign Name Templates
// ============================================================================

/// Leaver campaign names. Placeholders: `{employee_name}`, `{emp_id}`.
pub const LEAVER_TEMPLATES: &[&str] = &["Leaver Campaign for {employee_name} (Emp ID: {emp_id})"];

/// Quarterly campaign names.
///
/// Placeholders: `{year}`, `{quarter}`, `{timestamp}`, `{group}`, `{department}`.
pub const QUARTERLY_TEMPLATES: &[&str] = &[
    "Quarterly Access Review - {year} Q{quarter} ({timestamp})",
    "Quarterly Access Review Group {group} - {year} Q{quarter} ({timestamp})",
    "Quarterly Access Review for {department} - {year} Q{quarter} ({timestamp})",
];

/// Special access review names. Some carry a `{year}` placeholder.
pub const SPECIAL_TEMPLATES: &[&str] = &[
    "Kiteworks User Access (Accellion)",
    "Accellion Kiteworks User Access",
    "Electronic Payment System Access Review {year}",
    "Facets Online Training",
    "Local Workstation Admin Rights",
    "Filebound access campaign v2",
    "Privileged Access {year}",
    "Exclude for A-Admin with filters",
];
