///(key, french, english)
pub const TRANSLATIONS: &[(&str, &str, &str)] = &[
    // navigation
    ("nav.about", "À propos", "About"),
    ("nav.program", "Programme", "Program"),
    ("nav.gallery", "Galerie", "Gallery"),
    ("nav.budget", "Budget", "Budget"),
    ("nav.contact", "Contact", "Contact"),
    ("nav.admin", "Administration", "Admin"),
    ("nav.logout", "Déconnexion", "Log out"),
    ("nav.home", "Accueil", "Home"),
    ("register", "S'inscrire", "Register"),
    ("language.switch", "English", "Français"),
    // hero
    ("dates", "18 - 22 Août 2025", "August 18 - 22, 2025"),
    ("hero.title", "Summer Maths Camp", "Summer Maths Camp"),
    ("hero.subtitle", "Édition II", "Edition II"),
    (
        "hero.description",
        "Le Benin Maths Camp 2025 propose des activités réparties en deux ateliers distincts : un atelier consacré au camp traditionnel, et un second axé sur la programmation et la robotique.",
        "The Benin Maths Camp 2025 offers activities divided into two distinct workshops: one dedicated to the traditional camp, and a second focused on programming and robotics.",
    ),
    (
        "hero.free",
        "Aucun frais d'inscription - Accès entièrement gratuit",
        "No registration fees - Completely free access",
    ),
    ("register.now", "S'inscrire maintenant", "Register Now"),
    ("hero.learn_more", "En savoir plus", "Learn more"),
    // about
    ("about", "À propos", "About"),
    ("about.title", "Contexte et Justification", "Context and Rationale"),
    (
        "about.subtitle",
        "Notre camp d'été intensif en mathématiques est conçu pour les élèves passionnés qui souhaitent approfondir leurs connaissances dans un environnement académique stimulant.",
        "Our intensive mathematics summer camp is designed for passionate students who wish to deepen their knowledge in a stimulating academic environment.",
    ),
    ("about.excellence.title", "Un programme d'excellence", "A Program of Excellence"),
    (
        "about.excellence.description",
        "Le Summer Maths Camp offre un environnement d'apprentissage exceptionnel où les élèves explorent des concepts mathématiques avancés sous la direction d'experts reconnus.",
        "The Summer Maths Camp offers an exceptional learning environment where students explore advanced mathematical concepts under the guidance of recognized experts.",
    ),
    ("about.who.title", "Pour qui ?", "Who is it for?"),
    (
        "about.who.description",
        "Le camp est destiné aux élèves du secondaire (14-18 ans) manifestant un intérêt particulier pour les mathématiques et les sciences.",
        "The camp is designed for high school students (14-18 years old) with a particular interest in mathematics and science.",
    ),
    ("about.vision.title", "Une vision inclusive", "An Inclusive Vision"),
    (
        "about.vision.description",
        "Nous croyons que le talent mathématique peut se trouver partout. C'est pourquoi tous les participants sont boursiers.",
        "We believe that mathematical talent can be found everywhere. That is why every participant is a scholarship recipient.",
    ),
    ("about.objectives.title", "Objectifs du Camp", "Camp Objectives"),
    ("about.obj1.title", "Renforcer les compétences", "Strengthen Skills"),
    (
        "about.obj1.description",
        "Approfondir les connaissances mathématiques à travers un programme enrichi et des méthodes pédagogiques innovantes.",
        "Deepen mathematical knowledge through an enriched program and innovative teaching methods.",
    ),
    ("about.obj2.title", "Stimuler la curiosité", "Stimulate Curiosity"),
    (
        "about.obj2.description",
        "Encourager l'exploration de concepts mathématiques et scientifiques avancés à travers des activités interactives.",
        "Encourage the exploration of advanced mathematical and scientific concepts through interactive activities.",
    ),
    ("about.obj3.title", "Promouvoir l'égalité", "Promote Equality"),
    (
        "about.obj3.description",
        "Offrir des bourses aux élèves issus de milieux défavorisés pour garantir l'accès à tous les talents.",
        "Offer scholarships to students from disadvantaged backgrounds to ensure access for all talented individuals.",
    ),
    ("about.obj4.title", "Développer l'esprit critique", "Develop Critical Thinking"),
    (
        "about.obj4.description",
        "Renforcer la capacité d'analyse et de résolution de problèmes complexes à travers des défis variés.",
        "Strengthen the ability to analyze and solve complex problems through varied challenges.",
    ),
    // program
    ("program", "Programme", "Program"),
    ("program.title", "Détails du Programme", "Program Details"),
    (
        "program.subtitle",
        "Un programme soigneusement conçu pour offrir un équilibre entre théorie, pratique et interaction sociale.",
        "A carefully designed program balancing theory, practice, and social interaction.",
    ),
    ("program.session.math", "Session Mathématiques", "Mathematics Session"),
    ("program.session.programming", "Session Programmation", "Programming Session"),
    (
        "program.session.math.description",
        "Pendant cette session, les participants exploreront une variété de thèmes mathématiques à travers des activités engageantes.",
        "During this session, participants will explore a variety of mathematical topics through engaging activities.",
    ),
    (
        "program.session.programming.description",
        "Pendant cette session, les participants découvriront les bases de l'algorithmique et de la programmation à travers des jeux, des ateliers de codage et des projets concrets.",
        "During this session, participants will discover the basics of algorithms and programming through games, coding workshops, and concrete projects.",
    ),
    ("program.themes", "Thèmes abordés :", "Topics covered:"),
    ("program.session.math.theme1", "Algèbre et structures algébriques", "Algebra and algebraic structures"),
    ("program.session.math.theme2", "Analyse mathématique", "Mathematical analysis"),
    ("program.session.math.theme3", "Géométrie avancée", "Advanced geometry"),
    ("program.session.math.theme4", "Théorie des nombres", "Number theory"),
    (
        "program.session.programming.theme1",
        "Algorithmique de base : raisonnement logique, pseudocode",
        "Basic algorithms: logical reasoning, pseudocode",
    ),
    (
        "program.session.programming.theme2",
        "Initiation à Python : variables, types, opérateurs",
        "Introduction to Python: variables, types, operators",
    ),
    (
        "program.session.programming.theme3",
        "Structures de contrôle : conditions, boucles",
        "Control structures: conditions, loops",
    ),
    (
        "program.session.programming.theme4",
        "Fonctions et données : listes, dictionnaires",
        "Functions and data: lists, dictionaries",
    ),
    (
        "program.session.programming.theme5",
        "Création de projets : réalisation en équipe, présentation orale",
        "Project creation: team implementation, oral presentation",
    ),
    ("program.activities.workshops", "Ateliers pratiques", "Practical workshops"),
    ("program.activities.workshops.time", "9h - 12h", "9 AM - 12 PM"),
    (
        "program.activities.workshops.description",
        "Sessions interactives pour approfondir des concepts mathématiques avancés.",
        "Interactive sessions to explore advanced mathematical concepts.",
    ),
    ("program.activities.lectures", "Conférences d'experts", "Expert lectures"),
    ("program.activities.lectures.time", "14h - 16h", "2 PM - 4 PM"),
    (
        "program.activities.lectures.description",
        "Présentations par des professionnels reconnus des mathématiques et des sciences.",
        "Presentations by recognized professionals in mathematics and science.",
    ),
    ("program.activities.mentoring", "Sessions de mentorat", "Mentoring sessions"),
    ("program.activities.mentoring.time", "16h - 17h30", "4 PM - 5:30 PM"),
    (
        "program.activities.mentoring.description",
        "Coaching personnalisé en petits groupes.",
        "Personalized coaching in small groups.",
    ),
    ("program.activities.competitions", "Compétitions mathématiques", "Mathematical competitions"),
    ("program.activities.competitions.time", "18h - 20h", "6 PM - 8 PM"),
    (
        "program.activities.competitions.description",
        "Défis et tournois pour stimuler l'émulation et l'esprit d'équipe.",
        "Challenges and tournaments to stimulate emulation and team spirit.",
    ),
    ("program.stats.days", "Jours d'immersion", "Days of immersion"),
    ("program.stats.workshops", "Ateliers interactifs", "Interactive workshops"),
    ("program.stats.experts", "Experts reconnus", "Recognized experts"),
    ("program.stats.participants", "Participants attendus", "Expected participants"),
    // gallery
    ("gallery", "Galerie", "Gallery"),
    ("gallery.title", "Retours d'Expérience", "Experience Feedback"),
    (
        "gallery.subtitle",
        "Découvrez les témoignages de nos participants, intervenants et partenaires des éditions précédentes.",
        "Discover testimonials from participants, speakers, and partners of previous editions.",
    ),
    (
        "gallery.testimonial1.quote",
        "Le camp de mathématiques a été pour moi une expérience nouvelle et géniale. Ce camp m'a fait gagner beaucoup en connaissances et m'a surtout fait aimer encore plus la mathématique.",
        "The mathematics camp was a new and great experience for me. It helped me gain a lot of knowledge and made me love mathematics even more.",
    ),
    ("gallery.testimonial1.author", "Merveille ADEYANDJOU, Collines, CEG1 Savè", "Merveille ADEYANDJOU, Collines, CEG1 Savè"),
    (
        "gallery.testimonial2.quote",
        "L'objectif de susciter l'amour des Mathématiques chez les enfants à travers les jeux a été un franc succès, vérifiable à travers l'enthousiasme des élèves.",
        "The objective of arousing love for Mathematics in children through games was a great success, visible in the students' enthusiasm.",
    ),
    ("gallery.testimonial2.author", "Koffi Benjamin AGBENAGLO, Togo", "Koffi Benjamin AGBENAGLO, Togo"),
    (
        "gallery.testimonial3.quote",
        "Je voudrais une fois encore remercier tous les organisateurs et les facilitateurs du camp de maths Comé 2024.",
        "I would like to once again thank all the organizers and facilitators of the Comé 2024 math camp.",
    ),
    ("gallery.testimonial3.author", "Magloire EDEY, Parent", "Magloire EDEY, Parent"),
    // budget
    ("budget", "Financement", "Funding"),
    ("budget.title", "Contribuez à l'Éducation", "Support Education"),
    (
        "budget.description",
        "Votre soutien permet d'offrir une formation mathématique avancée à de jeunes talents. Chaque contribution compte, quelle que soit sa taille.",
        "Your support provides advanced mathematical training to young talents. Every contribution counts, regardless of its size.",
    ),
    ("budget.total", "Budget total", "Total Budget"),
    (
        "budget.distribution",
        "Répartition des fonds nécessaires pour l'organisation du Summer Maths Camp - Édition II.",
        "Distribution of funds needed for organizing the Summer Maths Camp - Edition II.",
    ),
    (
        "budget.free",
        "100% des élèves participants sont boursiers et n'ont aucun frais d'inscription à payer.",
        "100% of participating students are scholarship recipients and pay no registration fees.",
    ),
    ("budget.category", "Catégorie", "Category"),
    ("budget.amount", "Montant", "Amount"),
    ("budget.share", "Part", "Share"),
    ("budget.total.row", "Total général", "Grand Total"),
    ("budget.item.materials", "Matériel pédagogique", "Teaching materials"),
    ("budget.item.speakers", "Honoraires intervenants", "Speaker fees"),
    ("budget.item.travel", "Transport et hébergement", "Transport and accommodation"),
    ("budget.item.scholarships", "Bourses", "Scholarships"),
    ("budget.item.administration", "Administration", "Administration"),
    ("budget.partner.title", "Devenez Partenaire", "Become a Partner"),
    (
        "budget.partner.description",
        "Nous proposons différentes modalités de partenariat adaptées à vos objectifs.",
        "We offer several partnership options tailored to your goals.",
    ),
    ("budget.partner.gold", "Partenaire Or", "Gold Partner"),
    (
        "budget.partner.gold.description",
        "Visibilité maximale pendant l'événement et sur tous les supports de communication.",
        "Maximum visibility during the event and on all communication materials.",
    ),
    ("budget.partner.silver", "Partenaire Argent", "Silver Partner"),
    (
        "budget.partner.silver.description",
        "Visibilité lors des moments clés du camp et sur les supports principaux.",
        "Visibility at key moments of the camp and on the main materials.",
    ),
    ("budget.partner.bronze", "Partenaire Bronze", "Bronze Partner"),
    (
        "budget.partner.bronze.description",
        "Mention du partenariat sur le site et dans le programme du camp.",
        "Partnership mention on the website and in the camp program.",
    ),
    ("budget.contact.us", "Contactez-nous pour un partenariat entreprise", "Contact us for a business partnership"),
    ("budget.mail.subject", "Partenariat Summer Maths Camp", "Summer Maths Camp partnership"),
    (
        "budget.mail.body",
        "Bonjour, notre organisation souhaite soutenir le Summer Maths Camp - Édition II.",
        "Hello, our organisation would like to support the Summer Maths Camp - Edition II.",
    ),
    // contact
    ("contact", "Contact", "Contact"),
    ("contact.title", "Intéressé(e) ?", "Interested?"),
    (
        "contact.subtitle",
        "Que vous soyez un futur participant, un parent, un intervenant potentiel ou un partenaire, nous serons ravis d'échanger avec vous.",
        "Whether you are a future participant, a parent, a potential speaker, or a partner, we would be delighted to hear from you.",
    ),
    ("contact.fullname", "Nom complet", "Full name"),
    ("contact.your.name", "Votre nom", "Your name"),
    ("contact.email", "Email", "Email"),
    ("contact.email.placeholder", "votre.email@exemple.com", "your.email@example.com"),
    ("contact.phone", "Téléphone", "Phone"),
    ("contact.phone.placeholder", "+229 XXXXXXXX", "+229 XXXXXXXX"),
    ("contact.interested.as", "Je suis intéressé(e) en tant que :", "I am interested as a:"),
    ("contact.participant", "Participant", "Participant"),
    ("contact.parent", "Parent", "Parent"),
    ("contact.speaker", "Intervenant", "Speaker"),
    ("contact.partner", "Partenaire", "Partner"),
    ("contact.message", "Message", "Message"),
    ("contact.message.placeholder", "Votre message ou question...", "Your message or question..."),
    ("contact.sending", "Envoi en cours...", "Sending..."),
    ("contact.send", "Envoyer", "Send"),
    ("contact.success", "Votre message a été envoyé avec succès !", "Your message has been successfully sent!"),
    (
        "contact.partner.success",
        "Votre client de messagerie va s'ouvrir avec un message pré-rempli.",
        "Your mail client will open with a pre-filled message.",
    ),
    ("contact.mail.subject", "Message de {name} ({interest})", "Message from {name} ({interest})"),
    ("contact.info.title", "Informations de contact", "Contact Information"),
    (
        "contact.info.description",
        "N'hésitez pas à nous contacter directement pour toute question concernant le Summer Maths Camp - Édition II.",
        "Feel free to contact us directly with any questions about the Summer Maths Camp - Edition II.",
    ),
    ("contact.email.label", "Email", "Email"),
    ("contact.faq.title", "Foire Aux Questions", "Frequently Asked Questions"),
    ("contact.faq1.question", "Comment s'inscrire au Summer Maths Camp ?", "How do I register for the Summer Maths Camp?"),
    (
        "contact.faq1.answer",
        "Les inscriptions se font via le formulaire en ligne. Notre équipe examinera votre candidature et vous contactera.",
        "Registration is done through the online form. Our team will review your application and contact you.",
    ),
    ("contact.faq2.question", "Quelles sont les conditions d'éligibilité ?", "What are the eligibility conditions?"),
    (
        "contact.faq2.answer",
        "Le camp est ouvert aux élèves de 14 à 18 ans, de la 4ème à la Terminale.",
        "The camp is open to students aged 14 to 18, from 4ème to Terminale.",
    ),
    ("contact.faq3.question", "Les repas et l'hébergement sont-ils inclus ?", "Are meals and accommodation included?"),
    (
        "contact.faq3.answer",
        "Oui, les repas et l'hébergement sont pris en charge. Seul le transport reste à votre charge.",
        "Yes, meals and accommodation are covered. Only transport is at your expense.",
    ),
    // footer
    (
        "footer.description",
        "Un programme intensif pour les jeunes passionnés de mathématiques, offrant une expérience d'apprentissage immersive et stimulante.",
        "An intensive program for young math enthusiasts, offering an immersive and stimulating learning experience.",
    ),
    ("footer.rights", "Tous droits réservés.", "All rights reserved."),
    // 404
    (
        "404.title",
        "Oups! La page que vous recherchez semble avoir disparu dans l'univers des mathématiques.",
        "Oops! The page you're looking for seems to have disappeared into the mathematical universe.",
    ),
    ("404.button", "Retour à l'accueil", "Back to Home"),
    // registration
    ("inscription.title", "Inscription au Summer Maths Camp", "Summer Maths Camp Registration"),
    (
        "inscription.description",
        "Remplissez ce formulaire pour soumettre votre candidature. La participation est entièrement gratuite, seuls les frais de transport sont à votre charge.",
        "Fill in this form to submit your application. Participation is completely free; only transport costs are at your expense.",
    ),
    ("inscription.firstName", "Prénom", "First name"),
    ("inscription.lastName", "Nom", "Last name"),
    ("inscription.email", "Email", "Email"),
    ("inscription.phone", "Téléphone", "Phone"),
    ("inscription.age", "Âge", "Age"),
    ("inscription.school", "École actuelle", "Current school"),
    ("inscription.city", "Ville", "City"),
    ("inscription.schoolLevel", "Niveau scolaire", "School level"),
    ("inscription.schoolLevel.placeholder", "Sélectionnez votre niveau", "Select your level"),
    ("inscription.department", "Département", "Department"),
    ("inscription.department.placeholder", "Sélectionnez votre département", "Select your department"),
    ("inscription.commune", "Commune", "Commune"),
    ("inscription.commune.placeholder", "Sélectionnez votre commune", "Select your commune"),
    ("inscription.motivation", "Lettre de motivation", "Motivation letter"),
    (
        "inscription.motivation.placeholder",
        "Expliquez pourquoi vous souhaitez participer au Summer Maths Camp et ce que vous espérez y apprendre.",
        "Explain why you want to take part in the Summer Maths Camp and what you hope to learn.",
    ),
    (
        "inscription.motivation.hint",
        "Minimum 50 caractères. Décrivez votre intérêt pour les mathématiques et vos objectifs.",
        "At least 50 characters. Describe your interest in mathematics and your goals.",
    ),
    ("inscription.submit", "Soumettre ma candidature", "Submit my application"),
    ("inscription.sending", "Envoi en cours...", "Sending..."),
    ("inscription.success.title", "Inscription envoyée avec succès !", "Registration sent successfully!"),
    (
        "inscription.success.description",
        "Votre candidature a été reçue sous le numéro {id}. Nous vous contacterons bientôt.",
        "Your application was received under number {id}. We will contact you soon.",
    ),
    (
        "inscription.success.no_id",
        "Votre candidature a été reçue. Nous vous contacterons bientôt.",
        "Your application has been received. We will contact you soon.",
    ),
    ("inscription.mail.subject", "Inscription de {name}", "Registration of {name}"),
    ("level.quatrieme", "4ème", "4ème"),
    ("level.troisieme", "3ème", "3ème"),
    ("level.seconde", "2nde", "2nde"),
    ("level.premiere", "1ère", "1ère"),
    ("level.terminale", "Terminale", "Terminale"),
    // validation
    ("validation.required", "Ce champ est requis", "This field is required"),
    ("validation.too_short", "Veuillez saisir au moins {min} caractères", "Please enter at least {min} characters"),
    ("validation.email", "Email invalide", "Invalid email"),
    ("validation.phone", "Numéro de téléphone invalide", "Invalid phone number"),
    ("validation.age.range", "L'âge doit être entre {min} et {max} ans", "Age must be between {min} and {max}"),
    ("validation.age.number", "L'âge doit être un nombre entier", "Age must be a whole number"),
    ("validation.school_level", "Veuillez sélectionner votre niveau scolaire", "Please select your school level"),
    ("validation.department", "Veuillez sélectionner un département valide", "Please select a valid department"),
    ("validation.commune", "Cette commune n'appartient pas au département choisi", "This commune does not belong to the selected department"),
    ("validation.summary", "Veuillez corriger les champs indiqués.", "Please correct the highlighted fields."),
    // submission outcomes
    ("submission.error.title", "Erreur lors de l'envoi", "Sending failed"),
    (
        "submission.timeout",
        "Le serveur met trop de temps à répondre. Vérifiez votre connexion internet et réessayez.",
        "The server is taking too long to respond. Check your internet connection and try again.",
    ),
    (
        "submission.network",
        "Impossible de joindre le serveur. Vérifiez votre connexion internet.",
        "Unable to reach the server. Check your internet connection.",
    ),
    (
        "submission.unknown",
        "Une erreur inattendue est survenue. Veuillez réessayer plus tard ou nous contacter directement.",
        "An unexpected error occurred. Please try again later or contact us directly.",
    ),
    ("submission.generic_status", "Erreur serveur ({status})", "Server error ({status})"),
    (
        "submission.fallback.confirm",
        "Le serveur est injoignable. Voulez-vous envoyer votre demande par email à la place ?",
        "The server cannot be reached. Would you like to send your request by email instead?",
    ),
    ("submission.fallback.link", "Envoyer par email", "Send by email"),
    // errors & notifications
    ("error.rate_limited", "Trop de requêtes. Veuillez patienter avant de réessayer.", "Too many requests. Please wait before trying again."),
    ("notification.dismiss", "Fermer", "Dismiss"),
    ("notification.success", "Succès !", "Success!"),
    // admin
    ("admin.title", "Candidatures", "Applications"),
    ("admin.updated", "Statut de {id} mis à jour", "Status of {id} updated"),
    ("admin.login.title", "Portail d'administration", "Admin Portal"),
    ("admin.login.failed", "Email ou mot de passe incorrect", "Email/Password not found or password incorrect"),
    ("admin.email", "Email", "Email"),
    ("admin.password", "Mot de passe", "Password"),
    ("admin.login.submit", "Se connecter", "Log in"),
    ("admin.col.id", "N°", "ID"),
    ("admin.col.name", "Nom", "Name"),
    ("admin.col.contact", "Contact", "Contact"),
    ("admin.col.age", "Âge", "Age"),
    ("admin.col.level", "Niveau", "Level"),
    ("admin.col.school", "École", "School"),
    ("admin.col.location", "Localité", "Location"),
    ("admin.col.registered", "Inscrit le", "Registered"),
    ("admin.col.status", "Statut", "Status"),
    ("admin.col.actions", "Actions", "Actions"),
    ("admin.filter", "Filtrer", "Filter"),
    ("admin.logged_in_as", "Connecté en tant que {email}", "Logged in as {email}"),
    ("admin.empty", "Aucune candidature", "No applications"),
    ("admin.accept", "Accepter", "Accept"),
    ("admin.reject", "Refuser", "Reject"),
    ("admin.reset", "Remettre en attente", "Back to pending"),
    ("status.pending", "En attente", "Pending"),
    ("status.accepted", "Acceptée", "Accepted"),
    ("status.rejected", "Refusée", "Rejected"),
];
