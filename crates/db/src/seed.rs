//! Reference dataset loaded into an empty store.
//!
//! Seeding is keyed on the pillar collection: if it holds any rows the
//! store is assumed to be populated and nothing is written.

use heritage_core::error::CoreError;

use crate::models::gallery_item::CreateGalleryItem;
use crate::models::pillar::CreateCulturalPillar;
use crate::models::timeline_era::CreateTimelineEra;
use crate::store::HeritageStore;

/// Counts of records written by [`seed_if_empty`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub pillars: usize,
    pub timeline_eras: usize,
    pub gallery_items: usize,
}

/// Insert the reference dataset unless pillars already exist.
///
/// Returns `None` when the store was already populated.
pub async fn seed_if_empty(store: &dyn HeritageStore) -> Result<Option<SeedReport>, CoreError> {
    if !store.list_pillars().await?.is_empty() {
        tracing::info!("Store already seeded, skipping");
        return Ok(None);
    }

    let mut report = SeedReport::default();

    for pillar in pillars() {
        store.create_pillar(&pillar).await?;
        report.pillars += 1;
    }
    tracing::debug!(count = report.pillars, "Seeded cultural pillars");

    for era in timeline_eras() {
        store.create_timeline_era(&era).await?;
        report.timeline_eras += 1;
    }
    tracing::debug!(count = report.timeline_eras, "Seeded timeline eras");

    for item in gallery_items() {
        store.create_gallery_item(&item).await?;
        report.gallery_items += 1;
    }
    tracing::debug!(count = report.gallery_items, "Seeded gallery items");

    tracing::info!(
        pillars = report.pillars,
        timeline_eras = report.timeline_eras,
        gallery_items = report.gallery_items,
        "Store seeded"
    );
    Ok(Some(report))
}

/// The three cultural pillars shown on the landing grid.
pub fn pillars() -> Vec<CreateCulturalPillar> {
    vec![
        CreateCulturalPillar {
            slug: "architecture".into(),
            title: "Indian Architecture".into(),
            subtitle: "Temples, Palaces & Sacred Spaces".into(),
            description: "From the intricate carvings of Khajuraho to the soaring gopurams of Tamil Nadu, Indian architecture represents millennia of spiritual and artistic evolution. Each structure tells stories of devotion, power, and the eternal quest for harmony between heaven and earth.".into(),
            image_url: "https://images.unsplash.com/photo-1524492412937-b28074a5d7da?w=800&q=80".into(),
            image_alt: "Ancient Indian temple architecture with intricate stone carvings".into(),
            sort_order: 1,
        },
        CreateCulturalPillar {
            slug: "philosophy".into(),
            title: "Philosophy & Wisdom".into(),
            subtitle: "Yoga, Vedas & Ancient Knowledge".into(),
            description: "The philosophical traditions of India have illuminated human consciousness for over five thousand years. From the meditative practices of yoga to the profound insights of the Upanishads, this wisdom tradition continues to guide seekers across the globe.".into(),
            image_url: "https://images.unsplash.com/photo-1545389336-cf090694435e?w=800&q=80".into(),
            image_alt: "Meditation and yoga practice representing Indian philosophy".into(),
            sort_order: 2,
        },
        CreateCulturalPillar {
            slug: "global".into(),
            title: "Global Influences".into(),
            subtitle: "Trade Routes & Cultural Exchange".into(),
            description: "Through the Silk Road and maritime spice routes, Indian culture flowed outward, enriching civilizations from Rome to China. Textiles, spices, mathematics, and spiritual practices traveled across continents, weaving India into the fabric of world heritage.".into(),
            image_url: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&q=80".into(),
            image_alt: "Ancient trade routes connecting civilizations".into(),
            sort_order: 3,
        },
    ]
}

/// Timeline eras in chronological display order.
pub fn timeline_eras() -> Vec<CreateTimelineEra> {
    vec![
        CreateTimelineEra {
            slug: "indus-valley".into(),
            era: "3300-1300 BCE".into(),
            title: "Indus Valley Civilization".into(),
            period: "The Dawn of Urban India".into(),
            description: "One of the world's earliest urban civilizations flourished along the Indus River. Cities like Mohenjo-daro and Harappa showcased remarkable urban planning, with sophisticated drainage systems, standardized weights, and a still-undeciphered script. Their legacy lives on in the artistic traditions and craft techniques that continue to this day.".into(),
            image_url: "https://images.unsplash.com/photo-1587474260584-136574528ed5?w=400&q=80".into(),
            image_alt: "Archaeological ruins representing Indus Valley civilization".into(),
            sort_order: 1,
        },
        CreateTimelineEra {
            slug: "vedic-age".into(),
            era: "1500-500 BCE".into(),
            title: "The Vedic Age".into(),
            period: "Birth of Sacred Literature".into(),
            description: "The composition of the Vedas marked the beginning of India's rich literary tradition. These sacred hymns, philosophical dialogues, and ritual texts laid the foundation for Hindu philosophy, astronomy, mathematics, and medicine. The concepts of dharma, karma, and moksha emerged during this transformative period.".into(),
            image_url: "https://images.unsplash.com/photo-1609619385002-f40f1df827b8?w=400&q=80".into(),
            image_alt: "Ancient Sanskrit manuscripts representing Vedic knowledge".into(),
            sort_order: 2,
        },
        CreateTimelineEra {
            slug: "mauryan".into(),
            era: "322-185 BCE".into(),
            title: "Mauryan Empire".into(),
            period: "The First Pan-Indian Dynasty".into(),
            description: "Under Chandragupta Maurya and his grandson Ashoka, India saw its first great empire spanning nearly the entire subcontinent. Ashoka's conversion to Buddhism and his rock edicts promoting non-violence and ethical governance left an indelible mark on Indian civilization and beyond.".into(),
            image_url: "https://images.unsplash.com/photo-1582510003544-4d00b7f74220?w=400&q=80".into(),
            image_alt: "Ashoka pillar representing Mauryan Empire".into(),
            sort_order: 3,
        },
        CreateTimelineEra {
            slug: "silk-road".into(),
            era: "200 BCE - 1450 CE".into(),
            title: "Silk Road Era".into(),
            period: "Global Cultural Exchange".into(),
            description: "India became a crucial node in the vast network of trade routes connecting East and West. Spices, textiles, precious stones, and ideas flowed from Indian ports and overland routes. Buddhism traveled to Central Asia, China, and Southeast Asia, while Indian mathematics and astronomy influenced Islamic scholars.".into(),
            image_url: "https://images.unsplash.com/photo-1548013146-72479768bada?w=400&q=80".into(),
            image_alt: "Ancient trading routes and cultural exchange".into(),
            sort_order: 4,
        },
        CreateTimelineEra {
            slug: "classical".into(),
            era: "320-550 CE".into(),
            title: "Gupta Golden Age".into(),
            period: "The Classical Flowering".into(),
            description: "Often called India's Golden Age, the Gupta period witnessed unprecedented achievements in art, science, and literature. Kalidasa composed immortal poetry, Aryabhata revolutionized mathematics and astronomy, and the temples of this era set standards that would influence architecture for centuries.".into(),
            image_url: "https://images.unsplash.com/photo-1564507592333-c60657eea523?w=400&q=80".into(),
            image_alt: "Classical Indian art and sculpture from Gupta period".into(),
            sort_order: 5,
        },
    ]
}

/// Gallery items for the masonry grid.
pub fn gallery_items() -> Vec<CreateGalleryItem> {
    vec![
        CreateGalleryItem {
            slug: "holi".into(),
            title: "Holi - Festival of Colors".into(),
            category: "Festivals".into(),
            region: Some("North India".into()),
            description: "Spring celebration of love and colors".into(),
            detailed_description: "Holi, the ancient Hindu festival of colors, celebrates the triumph of good over evil and the arrival of spring. Participants throw vibrant colored powders called gulal, dance to dhol drums, and share sweets. The festival has roots in Hindu mythology, commemorating the divine love of Radha and Krishna, and the burning of the demoness Holika. Today, Holi has transcended religious boundaries to become a global celebration of joy, unity, and the victory of light over darkness.".into(),
            image_url: "https://images.unsplash.com/photo-1576618148400-f54bed99fcfd?w=600&q=80".into(),
            image_alt: "Colorful celebration of Holi festival".into(),
            aspect_ratio: "portrait".into(),
            sort_order: 1,
        },
        CreateGalleryItem {
            slug: "kathakali".into(),
            title: "Kathakali Dance Drama".into(),
            category: "Performing Arts".into(),
            region: Some("Kerala".into()),
            description: "Classical dance-drama from Kerala".into(),
            detailed_description: "Kathakali is a centuries-old classical Indian dance-drama originating from Kerala. Distinguished by its elaborate costumes, intricate makeup (which can take hours to apply), and dramatic expressions called navarasas, Kathakali tells stories from the Mahabharata and Ramayana. Performers train for years to master the complex hand gestures (mudras), facial expressions, and footwork that bring ancient epics to life on stage.".into(),
            image_url: "https://images.unsplash.com/photo-1582510003544-4d00b7f74220?w=600&q=80".into(),
            image_alt: "Kathakali dancer in traditional costume and makeup".into(),
            aspect_ratio: "square".into(),
            sort_order: 2,
        },
        CreateGalleryItem {
            slug: "madhubani".into(),
            title: "Madhubani Painting".into(),
            category: "Visual Arts".into(),
            region: Some("Bihar".into()),
            description: "Ancient folk art tradition from Bihar".into(),
            detailed_description: "Madhubani painting, also called Mithila art, originated in the Mithila region of Bihar over 2,500 years ago. Traditionally painted by women on mud walls during festivals and ceremonies, these vibrant works feature geometric patterns, mythological scenes, and nature motifs. Using natural dyes from plants, charcoal, and ochre, artists create intricate designs without leaving any empty space—a style called 'double line border.' Today, Madhubani art is recognized globally as a UNESCO intangible cultural heritage.".into(),
            image_url: "https://images.unsplash.com/photo-1578301978162-7aae4d755744?w=600&q=80".into(),
            image_alt: "Colorful Madhubani folk art painting".into(),
            aspect_ratio: "landscape".into(),
            sort_order: 3,
        },
        CreateGalleryItem {
            slug: "diwali".into(),
            title: "Diwali - Festival of Lights".into(),
            category: "Festivals".into(),
            region: Some("Pan-India".into()),
            description: "Celebration of light over darkness".into(),
            detailed_description: "Diwali, the Festival of Lights, is one of India's most beloved celebrations, marking the victory of light over darkness and knowledge over ignorance. Homes are adorned with countless oil lamps (diyas) and colorful rangoli patterns. The festival honors various deities across different regions—Lakshmi for prosperity in the north, and the return of Lord Rama from exile. Fireworks illuminate the sky as families gather to exchange gifts, share sweets, and celebrate new beginnings.".into(),
            image_url: "https://images.unsplash.com/photo-1574265935825-0f3e5e96e13a?w=600&q=80".into(),
            image_alt: "Diwali celebration with oil lamps and lights".into(),
            aspect_ratio: "square".into(),
            sort_order: 4,
        },
        CreateGalleryItem {
            slug: "taj-mahal".into(),
            title: "Taj Mahal".into(),
            category: "Architecture".into(),
            region: Some("Uttar Pradesh".into()),
            description: "Monument to eternal love".into(),
            detailed_description: "The Taj Mahal stands as perhaps the world's most beautiful testament to love. Built by Mughal Emperor Shah Jahan as a mausoleum for his beloved wife Mumtaz Mahal, this white marble masterpiece took 22 years and 20,000 artisans to complete. Its perfect symmetry, intricate pietra dura inlay work, and the way its color changes with the light—from pink at dawn to white at noon to golden at sunset—make it one of humanity's greatest architectural achievements.".into(),
            image_url: "https://images.unsplash.com/photo-1564507592333-c60657eea523?w=600&q=80".into(),
            image_alt: "The magnificent Taj Mahal at sunrise".into(),
            aspect_ratio: "landscape".into(),
            sort_order: 5,
        },
        CreateGalleryItem {
            slug: "warli".into(),
            title: "Warli Tribal Art".into(),
            category: "Visual Arts".into(),
            region: Some("Maharashtra".into()),
            description: "Indigenous art from Maharashtra".into(),
            detailed_description: "Warli art is one of India's oldest tribal art forms, practiced by the Warli tribe of Maharashtra for over 3,000 years. Using only white pigment made from rice paste on mud walls, artists create simple yet profound geometric shapes—circles, triangles, and squares—representing the sun, mountains, and sacred enclosures. The distinctive 'tarpa dance' motif, showing villagers holding hands in a spiral, symbolizes unity and the rhythm of daily life in tribal communities.".into(),
            image_url: "https://images.unsplash.com/photo-1580136579312-94651dfd596d?w=600&q=80".into(),
            image_alt: "Traditional Warli tribal art patterns".into(),
            aspect_ratio: "portrait".into(),
            sort_order: 6,
        },
        CreateGalleryItem {
            slug: "hampi".into(),
            title: "Ruins of Hampi".into(),
            category: "Heritage Sites".into(),
            region: Some("Karnataka".into()),
            description: "Medieval Vijayanagara Empire capital".into(),
            detailed_description: "The haunting ruins of Hampi spread across a surreal boulder-strewn landscape, telling the story of one of medieval India's most powerful empires. Once the thriving capital of the Vijayanagara Empire with over 500,000 inhabitants, Hampi was described by travelers as larger than Rome. Its temples, royal enclosures, and marketplace ruins—now a UNESCO World Heritage Site—showcase the pinnacle of Dravidian architecture and the empire's sophisticated urban planning.".into(),
            image_url: "https://images.unsplash.com/photo-1600100397608-e1f0dc64d2f8?w=600&q=80".into(),
            image_alt: "Ancient stone chariot temple at Hampi".into(),
            aspect_ratio: "landscape".into(),
            sort_order: 7,
        },
        CreateGalleryItem {
            slug: "bharatanatyam".into(),
            title: "Bharatanatyam".into(),
            category: "Performing Arts".into(),
            region: Some("Tamil Nadu".into()),
            description: "Classical dance from Tamil Nadu".into(),
            detailed_description: "Bharatanatyam is one of India's oldest classical dance forms, originating in Tamil Nadu temples over 2,000 years ago. This exquisite art form combines nritta (pure dance), nritya (expressive dance), and natya (dramatic element) into a seamless performance. Dancers tell stories through elaborate footwork, precise hand gestures (mudras), and expressive eye movements, all set to classical Carnatic music. The iconic tribhanga pose—a triple bend of the body—has become emblematic of Indian art.".into(),
            image_url: "https://images.unsplash.com/photo-1518611012118-696072aa579a?w=600&q=80".into(),
            image_alt: "Bharatanatyam dancer in traditional attire".into(),
            aspect_ratio: "portrait".into(),
            sort_order: 8,
        },
        CreateGalleryItem {
            slug: "pongal".into(),
            title: "Pongal Harvest Festival".into(),
            category: "Festivals".into(),
            region: Some("Tamil Nadu".into()),
            description: "Tamil harvest celebration".into(),
            detailed_description: "Pongal is a four-day harvest festival celebrated in Tamil Nadu, marking the sun's journey northward. The festival's name comes from the tradition of boiling the first rice of the harvest until it 'pongs' or overflows—symbolizing abundance and prosperity. Homes are decorated with kolam (rangoli), cattle are honored with painted horns and garlands, and families gather to give thanks to the sun god Surya, the earth, and the cattle that help cultivate the land.".into(),
            image_url: "https://images.unsplash.com/photo-1606293926075-69a00dbfde81?w=600&q=80".into(),
            image_alt: "Traditional Pongal celebration with decorated pots".into(),
            aspect_ratio: "square".into(),
            sort_order: 9,
        },
        CreateGalleryItem {
            slug: "jaipur".into(),
            title: "Pink City of Jaipur".into(),
            category: "Heritage Sites".into(),
            region: Some("Rajasthan".into()),
            description: "Royal Rajasthani architecture".into(),
            detailed_description: "Jaipur, the Pink City, stands as a masterpiece of 18th-century urban planning. Founded by Maharaja Sawai Jai Singh II in 1727, the city's distinctive pink color was adopted in 1876 to welcome Prince Albert. The city's landmarks—Hawa Mahal with its 953 windows, the astronomical instruments of Jantar Mantar, and the Amber Fort—showcase the perfect blend of Rajput and Mughal architectural traditions. The old city's grid pattern was revolutionary for its time.".into(),
            image_url: "https://images.unsplash.com/photo-1477587458883-47145ed94245?w=600&q=80".into(),
            image_alt: "Hawa Mahal palace in Jaipur".into(),
            aspect_ratio: "portrait".into(),
            sort_order: 10,
        },
        CreateGalleryItem {
            slug: "textiles".into(),
            title: "Indian Textile Heritage".into(),
            category: "Crafts".into(),
            region: Some("Pan-India".into()),
            description: "Weaving traditions across India".into(),
            detailed_description: "India's textile traditions represent one of the world's richest craft heritages, with each region developing distinctive weaving techniques and patterns. From the golden muga silk of Assam to the intricate ikats of Andhra Pradesh, from Kashmiri pashmina to Gujarati bandhani, Indian textiles have been prized globally for millennia. The legendary fine muslins of Bengal were so delicate they were called 'woven air,' and Indian calicos and chintz sparked a fashion revolution in Europe.".into(),
            image_url: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=600&q=80".into(),
            image_alt: "Colorful traditional Indian textiles and fabrics".into(),
            aspect_ratio: "landscape".into(),
            sort_order: 11,
        },
        CreateGalleryItem {
            slug: "varanasi".into(),
            title: "Ghats of Varanasi".into(),
            category: "Heritage Sites".into(),
            region: Some("Uttar Pradesh".into()),
            description: "Sacred city on the Ganges".into(),
            detailed_description: "Varanasi, also known as Kashi or Benares, is one of the world's oldest continuously inhabited cities and Hinduism's holiest site. The city's ghats—stone steps leading down to the sacred Ganges River—are the heart of spiritual life, where pilgrims bathe at dawn, priests perform elaborate aarti ceremonies at dusk, and cremation fires burn eternally. Mark Twain wrote that Varanasi is 'older than history, older than tradition, older even than legend.'".into(),
            image_url: "https://images.unsplash.com/photo-1561361513-2d000a50f0dc?w=600&q=80".into(),
            image_alt: "Evening aarti ceremony at Varanasi ghats".into(),
            aspect_ratio: "landscape".into(),
            sort_order: 12,
        },
    ]
}
