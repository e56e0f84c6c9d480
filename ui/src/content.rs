//! Static site content: services, team and interview steps.
//!
//! These records carry their display text per language inline instead of
//! going through the translation table.

use crate::core::Language;

/// One string per supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub uz: &'static str,
    pub ru: &'static str,
    pub en: &'static str,
}

impl Localized {
    /// Same text in every language.
    pub const fn same(text: &'static str) -> Self {
        Self {
            uz: text,
            ru: text,
            en: text,
        }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Uz => self.uz,
            Language::Ru => self.ru,
            Language::En => self.en,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub id: &'static str,
    pub icon: &'static str,
    pub title: Localized,
    pub description: Localized,
    pub details: Localized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamMember {
    pub id: &'static str,
    pub name: &'static str,
    pub role: Localized,
    pub image: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterviewStep {
    pub id: u8,
    pub title: Localized,
    pub description: Localized,
}

/// A contact channel on the contact page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactChannel {
    /// Translation key of the channel label.
    pub label_key: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: "cybersecurity",
        icon: "🔐",
        title: Localized {
            uz: "Kiberxavfsizlik",
            ru: "Кибербезопасность",
            en: "Cybersecurity",
        },
        description: Localized {
            uz: "Tizimlaringizni eng murakkab hujumlardan himoya qilamiz.",
            ru: "Защищаем ваши системы от самых сложных атак.",
            en: "Protecting your systems from the most complex attacks.",
        },
        details: Localized {
            uz: "Bizning kiberxavfsizlik mutaxassislarimiz tashkilotingizning raqamli infratuzilmasini audit qiladi, zaifliklarni aniqlaydi va 24/7 monitoring tizimlarini joriy etadi.",
            ru: "Наши эксперты по кибербезопасности проводят аудит цифровой инфраструктуры вашей организации, выявляют уязвимости и внедряют системы мониторинга 24/7.",
            en: "Our cybersecurity experts audit your organization's digital infrastructure, identify vulnerabilities, and implement 24/7 monitoring systems.",
        },
    },
    Service {
        id: "mobile-apps",
        icon: "📱",
        title: Localized {
            uz: "Android ilovalari",
            ru: "Android приложения",
            en: "Android Apps",
        },
        description: Localized {
            uz: "Yuqori unumdorlikka ega zamonaviy mobil ilovalar.",
            ru: "Современные высокопроизводительные мобильные приложения.",
            en: "Modern high-performance mobile applications.",
        },
        details: Localized {
            uz: "Kraken Tech eng so'nggi Android SDK va frameworklaridan foydalangan holda, mijozlar ehtiyojiga moslashtirilgan, tezkor va xavfsiz ilovalarni ishlab chiqadi.",
            ru: "Kraken Tech разрабатывает быстрые и безопасные приложения, адаптированные под нужды клиентов, используя последние Android SDK и фреймворки.",
            en: "Kraken Tech develops fast and secure apps tailored to client needs using the latest Android SDK and frameworks.",
        },
    },
    Service {
        id: "web-dev",
        icon: "🌐",
        title: Localized {
            uz: "Saytlar yaratish",
            ru: "Создание сайтов",
            en: "Web Development",
        },
        description: Localized {
            uz: "Murakkab korporativ va e-commerce veb-yechimlar.",
            ru: "Сложные корпоративные и e-commerce веб-решения.",
            en: "Complex corporate and e-commerce web solutions.",
        },
        details: Localized {
            uz: "Biz nafaqat chiroyli, balki yuqori yuklamalarga chidamli veb-platformalar yaratamiz. SEO optimizatsiyasi va kiberxavfsizlik bizning ustuvorligimizdir.",
            ru: "Мы создаем не только красивые, но и устойчивые к высоким нагрузкам веб-платформы. SEO оптимизация и кибербезопасность — наши приоритеты.",
            en: "We create not just beautiful, but high-load resilient web platforms. SEO optimization and cybersecurity are our priorities.",
        },
    },
    Service {
        id: "robotics",
        icon: "🤖",
        title: Localized {
            uz: "Robotlar va avtomatlashtirish",
            ru: "Роботы и автоматизация",
            en: "Robotics & Automation",
        },
        description: Localized {
            uz: "Sanoat va biznes jarayonlarini robotlashtirish.",
            ru: "Роботизация промышленных и бизнес-процессов.",
            en: "Robotization of industrial and business processes.",
        },
        details: Localized {
            uz: "Kraken Tech Industries sanoat korxonalari uchun maxsus robotlashtirilgan tizimlar va dasturiy ta'minotlarni yetkazib beradi.",
            ru: "Kraken Tech Industries поставляет специализированные роботизированные системы и программное обеспечение для промышленных предприятий.",
            en: "Kraken Tech Industries supplies specialized robotic systems and software for industrial enterprises.",
        },
    },
    Service {
        id: "custom-projects",
        icon: "🛠",
        title: Localized {
            uz: "Individual loyihalar",
            ru: "Индивидуальные проекты",
            en: "Custom Projects",
        },
        description: Localized {
            uz: "Mijoz talablari asosida maxsus koding va muhandislik.",
            ru: "Спецкодинг и инженерия на основе требований заказчика.",
            en: "Special coding and engineering based on client requirements.",
        },
        details: Localized {
            uz: "Sizda g'oya bormi? Biz uni haqiqatga aylantiramiz. Eng murakkab muammolar uchun individual raqamli yechimlar.",
            ru: "У вас есть идея? Мы воплотим ее в жизнь. Индивидуальные цифровые решения для самых сложных проблем.",
            en: "Have an idea? We bring it to life. Individual digital solutions for the most complex problems.",
        },
    },
];

pub const TEAM: &[TeamMember] = &[
    TeamMember {
        id: "1",
        name: "Alisher Krakenov",
        role: Localized {
            uz: "Asoschi & CEO",
            ru: "Основатель и CEO",
            en: "Founder & CEO",
        },
        image: "https://odam.uz/upload/media/entries/2017-05/17/547-1-6997913e765547f69f6d5bdef2a5ed53.jpg",
    },
    TeamMember {
        id: "2",
        name: "Cyber Anna",
        role: Localized::same("CTO / Team Lead"),
        image: "https://iv.kommersant.ru/Issues.photo/REGIONS/PERM_Online/2022/02/22/KNO_005166_00017_1_t219_155140.jpg",
    },
    TeamMember {
        id: "3",
        name: "Neon Mike",
        role: Localized::same("Senior Robot Engineer"),
        image: "https://picsum.photos/seed/dev/200/200",
    },
];

pub const INTERVIEW_STEPS: &[InterviewStep] = &[
    InterviewStep {
        id: 1,
        title: Localized {
            uz: "Texnik test",
            ru: "Технический тест",
            en: "Technical Test",
        },
        description: Localized {
            uz: "Onlayn platformamizda fundamental bilimlar testi.",
            ru: "Тест фундаментальных знаний на нашей онлайн-платформе.",
            en: "Fundamental knowledge test on our online platform.",
        },
    },
    InterviewStep {
        id: 2,
        title: Localized {
            uz: "Amaliy topshiriq",
            ru: "Практическое задание",
            en: "Practical Task",
        },
        description: Localized {
            uz: "Real loyihalarga yaqin bo'lgan topshiriqni 48 soat ichida bajarish.",
            ru: "Выполнение задания, близкого к реальным проектам, в течение 48 часов.",
            en: "Complete a task close to real projects within 48 hours.",
        },
    },
    InterviewStep {
        id: 3,
        title: Localized {
            uz: "Team lead bilan suhbat",
            ru: "Собеседование с Team Lead",
            en: "Interview with Team Lead",
        },
        description: Localized {
            uz: "Texnik ko'nikmalar va \"code review\" muhokamasi.",
            ru: "Обсуждение технических навыков и \"code review\".",
            en: "Discussion of technical skills and code review.",
        },
    },
    InterviewStep {
        id: 4,
        title: Localized {
            uz: "Asoschi bilan suhbat",
            ru: "Интервью с Основателем",
            en: "Final Interview",
        },
        description: Localized {
            uz: "Madaniy moslik va kelajakdagi maqsadlar haqida.",
            ru: "О культурном соответствии и будущих целях.",
            en: "About cultural fit and future goals.",
        },
    },
];

/// Positions offered in the interview application form.
pub const OPEN_POSITIONS: &[&str] = &[
    "Frontend Engineer",
    "Backend Engineer",
    "Cybersecurity Specialist",
    "Robotics Developer",
];

pub const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        label_key: "contact_live_chat",
        value: "t.me/kraken_tech_official",
        icon: "💬",
        accent: "blue",
    },
    ContactChannel {
        label_key: "contact_email",
        value: "core@kraken-tech.uz",
        icon: "✉",
        accent: "purple",
    },
    ContactChannel {
        label_key: "contact_hotline",
        value: "+998 90 999 88 77",
        icon: "📞",
        accent: "plain",
    },
];

/// Footer contact lines: phone, email, address.
pub const FOOTER_PHONE: &str = "+998 71 123 45 67";
pub const FOOTER_EMAIL: &str = "contact@kraken-tech.uz";
pub const FOOTER_ADDRESS: &str = "Toshkent, O'zbekiston";

pub fn find_service(id: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|service| service.id == id)
}
