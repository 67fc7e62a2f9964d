//! Static prompt library.
//!
//! Pre-authored prompt templates offered for direct selection, bypassing
//! the question flow. Loaded once at startup and read-only for the
//! lifetime of the process.

use once_cell::sync::Lazy;

/// A static library template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryEntry {
    /// Category heading shown to the user.
    pub category: &'static str,
    /// Short title for the selection button.
    pub title: &'static str,
    /// The pre-authored prompt text.
    pub template: &'static str,
}

/// Read-only catalog of library entries.
#[derive(Debug)]
pub struct PromptLibrary {
    entries: Vec<LibraryEntry>,
}

impl PromptLibrary {
    /// Returns the built-in library.
    pub fn builtin() -> &'static PromptLibrary {
        &BUILTIN
    }

    /// Returns all entries, in catalog order.
    pub fn entries(&self) -> &[LibraryEntry] {
        &self.entries
    }

    /// Returns the distinct categories, in catalog order.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories = Vec::new();
        for entry in &self.entries {
            if !categories.contains(&entry.category) {
                categories.push(entry.category);
            }
        }
        categories
    }

    /// Returns the entries under a category.
    pub fn entries_in(&self, category: &str) -> Vec<&LibraryEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Looks up an entry by title.
    pub fn find(&self, title: &str) -> Option<&LibraryEntry> {
        self.entries.iter().find(|e| e.title == title)
    }
}

static BUILTIN: Lazy<PromptLibrary> = Lazy::new(|| PromptLibrary {
    entries: vec![
        LibraryEntry {
            category: "Nature and Landscapes",
            title: "Forests",
            template: "A mystical forest during twilight, dense fog weaving through towering ancient trees, glowing mushrooms scattered across the forest floor, ethereal light beams breaking through the canopy.",
        },
        LibraryEntry {
            category: "Nature and Landscapes",
            title: "Mountains",
            template: "A breathtaking snow-capped mountain range at sunrise, with golden light illuminating the peaks and a serene blue lake reflecting the view below.",
        },
        LibraryEntry {
            category: "Nature and Landscapes",
            title: "Beaches",
            template: "A tranquil tropical beach at sunset, with vibrant orange and pink hues painting the sky, crystal-clear turquoise water, and a wooden pier extending into the ocean.",
        },
        LibraryEntry {
            category: "Architecture",
            title: "Futuristic Cities",
            template: "A sprawling cyberpunk city at night, with neon-lit skyscrapers, flying cars, bustling streets filled with holographic signs, and a vibrant nightlife.",
        },
        LibraryEntry {
            category: "Architecture",
            title: "Historical Monuments",
            template: "A beautifully detailed Roman colosseum at dusk, surrounded by lush greenery and tourists admiring the historic grandeur.",
        },
        LibraryEntry {
            category: "Architecture",
            title: "Fantasy Castles",
            template: "An enormous floating castle in the sky, surrounded by fluffy white clouds, glowing waterfalls cascading from its edges, and magical birds flying around.",
        },
        LibraryEntry {
            category: "Professional Product Photography",
            title: "High-End Scotch Whiskey",
            template: "Professional photograph of a high-end scotch whiskey presented on the table, eye level, warm cinematic, Sony A7 105mm, close-up, centred shot --ar 2:1",
        },
        LibraryEntry {
            category: "Professional Product Photography",
            title: "Organic Pea Protein Powder",
            template: "Professional photograph of organic pea protein powder packaged in high-end packaging - recyclable material, eye level, warm cinematic, Sony A7 105mm, close-up, centred shot, octane render --ar 2:1",
        },
        LibraryEntry {
            category: "Professional Product Photography",
            title: "Hot Cappuccino",
            template: "Freshly made hot cappuccino on glass table, angled top down, midday warm, Nikon D850 105mm, close-up, centred shot --ar 2:1",
        },
        LibraryEntry {
            category: "Professional Product Photography",
            title: "Luxury Jewelry",
            template: "Luxury high resolution jewelry, minimalist wedding band, angled top down, studio bright, Nikon D850 105mm, close-up centred shot --ar 2:1",
        },
        LibraryEntry {
            category: "Realistic Human Portraits",
            title: "Young Man in New York",
            template: "Candid portrait of young man on a New York street, early 1900s, natural lighting, Nikon D850 35mm and f-stop 1.8, global illumination --ar 2:1",
        },
        LibraryEntry {
            category: "Realistic Human Portraits",
            title: "Beautiful Woman on Busy Street",
            template: "Candid photo portrait of beautiful woman on busy street, natural lighting, Nikon D850 105mm, f-stop 1.8, cinematic --ar 2:1",
        },
        LibraryEntry {
            category: "Realistic Human Portraits",
            title: "Best Friends at Skatepark",
            template: "A candid shot of young best friends dirty, at the skatepark, natural afternoon light, Canon EOS R5, 100mm, F 1.2 aperture setting capturing a moment, cinematic --ar 2:1",
        },
        LibraryEntry {
            category: "Logos and Brand Mascots",
            title: "Futuristic Worker Mascot",
            template: "A worker mascot for a futuristic manufacturing company, simple, line art, iconic, vector art, flat design, sky blue theme, creamy beige background --ar 2:1",
        },
        LibraryEntry {
            category: "Logos and Brand Mascots",
            title: "Rustic Coffee Company Logo",
            template: "An emblem logo for a rustic coffee company, 'Aroma Trails', minimalistic, line art, iconic, vector art, flat design, earthy brown and charcoal grey theme --ar 2:1",
        },
        LibraryEntry {
            category: "Logos and Brand Mascots",
            title: "Organic Skincare Brand Mascot",
            template: "A soothing mascot for an organic skincare brand, minimalistic, line art, vector art, flat design --ar 2:1",
        },
        LibraryEntry {
            category: "Lifestyle Stock Images of People",
            title: "Loving Couple on Beach",
            template: "A photograph of a couple caught in a loving moment with a scenic beach sunset as the background context, during dusk with soft, natural lighting and shot with a portrait lens, shot with a Sony Alpha a7 III, using the Sony FE 85mm f/1.4 GM lens --ar 2:1",
        },
        LibraryEntry {
            category: "Lifestyle Stock Images of People",
            title: "Intense Workout",
            template: "A photograph of a lady engaged in an intense workout with a modern, well-equipped gym as the background context, during the morning with bright, natural lighting and shot with a telephoto lens, shot with a Canon EOS R5, using the Canon EF 70-200mm lens. --ar 2:1 --v 5.1 --s 200",
        },
        LibraryEntry {
            category: "Landscapes",
            title: "Tropical Rainforest",
            template: "RAW photo, an award-winning National Geographic style HD photograph featuring the untamed beauty of the tropical rainforest. It's just after a rain shower at dusk, the orange-purple hues of twilight permeating the scene, casting long, dramatic shadows and creating a soft, diffused light that gives the landscape an almost ethereal feel. Taken using a Sony Alpha 1 with a 50mm f/1.8 lens, f/11 aperture, shutter speed 1/200s, ISO 100, This stunning image is rendered in insanely high resolution, realistic, 8k, HD, HDR, XDR, focus + sharpen + wide-angle 8K resolution + HDR10 Ken Burns effect + Adobe Lightroom + rule-of-thirds + high-detailed leaves + high-detailed bark + high-detailed feathers. An added touch of depth-of-field effect, lens flare, and digital negative are used to enhance the visual appeal. --ar 2:1",
        },
        LibraryEntry {
            category: "Landscapes",
            title: "Australian Outback",
            template: "RAW photo, an award-winning National Geographic style HD photograph featuring the striking beauty of the Australian Outback. Weather conditions are dry, causing the landscape to take on a deep, sun-baked hue, the long shadows creating stark contrasts. Taken using a Sony Alpha 1 with a 50mm f/1.8 lens, f/11 aperture, shutter speed 1/200s, ISO 100, realistic, 8k, HD, HDR, XDR, focus + sharpen + wide-angle 8K resolution + HDR10 Ken Burns effect + Adobe Lightroom + rule-of-thirds + high-detailed leaves + high-detailed bark + high-detailed fur --ar 2:1",
        },
        LibraryEntry {
            category: "Landscapes",
            title: "Thai Beach",
            template: "RAW photo, an award-winning National Geographic style HD photograph featuring the tranquil allure of a pristine Thai beach. Captured during the magic hour of sunset, the sky unfolds a symphony of pinks and oranges, casting a warm, romantic glow on the scenery. Taken using a Sony Alpha 1 with a 50mm f/1.8 lens, f/11 aperture, shutter speed 1/200s, ISO 100, This stunning image is rendered in insanely high resolution, realistic, 8k, HD, HDR, XDR, focus + sharpen + wide-angle 8K resolution + HDR10 Ken Burns effect + Adobe Lightroom + rule-of-thirds + high-detailed leaves + high-detailed bark. Effects of color grading, water motion blur, and starburst are incorporated for a visually arresting impact. --ar 2:1",
        },
        LibraryEntry {
            category: "Macro Photography",
            title: "Dewdrop on Spider Web",
            template: "Extreme close-up by Oliver Dum, magnified view of a dewdrop on a spider web occupying the frame, the camera focuses closely on the object with the background blurred. The image is lit with natural sunlight, enhancing the vivid textures and contrasting colors.",
        },
        LibraryEntry {
            category: "Macro Photography",
            title: "Weathered Coin",
            template: "Ultra close-up macro photograph of an old, weathered coin found in the dirt while metal detecting, highlighting the worn inscriptions and patina, with natural, overcast light, and a gritty texture of the soil. The Canon EOS R5 focuses closely on the coin with the background blurred. The scene is ultra detailed with realistic textures resembling a photograph taken using a Canon EF 100mm f/2.8L Macro IS USM lens.",
        },
        LibraryEntry {
            category: "Macro Photography",
            title: "Butterfly Wing",
            template: "Extreme close-up by Oliver Dum, magnified view of a butterfly wing occupying the frame, the camera focuses closely on the object with the background blurred. The image is lit with natural sunlight, enhancing the vivid textures.",
        },
        LibraryEntry {
            category: "YouTube Thumbnails",
            title: "Alex Hormozi Thumbnail",
            template: "Generic Alex Hormozi YouTube thumbnail --ar 16:9 --s 200 --c 50",
        },
        LibraryEntry {
            category: "YouTube Thumbnails",
            title: "iPhone Review Thumbnail",
            template: "iPhone review YouTube thumbnail --ar 16:9 --c 1",
        },
        LibraryEntry {
            category: "YouTube Thumbnails",
            title: "Man with Monkeys Thumbnail",
            template: "Typical YouTube thumbnail featuring a man with an open mouth standing in front of a group of monkeys. Turn on RTX for realistic detail. --ar 16:9",
        },
        LibraryEntry {
            category: "YouTube Thumbnails",
            title: "Typical Thumbnail",
            template: "Typical YouTube Thumbnail --ar 16:9 --s {100, 200, 600, 1000} --c {1, 50, 100}",
        },
        LibraryEntry {
            category: "Oil Paintings",
            title: "Serene Lakeside",
            template: "A serene lakeside scene at sunset with visible brushwork. Impasto texture and chiaroscuro lighting, emulating the style of a classical oil painting --ar 2:1",
        },
        LibraryEntry {
            category: "Oil Paintings",
            title: "European Café",
            template: "Capture a bustling European café scene, complete with intricate details, such as filigree ironwork and cobblestone streets. Use impasto technique for texture and employ sfumato for a smoky atmosphere, in the tradition of old master oil paintings. --ar 2:1 --s 600 --c 100",
        },
        LibraryEntry {
            category: "Oil Paintings",
            title: "Autumn Forest",
            template: "Create an image of a tranquil autumn forest with a meandering stream. Use palette-knife strokes for a textured appearance, incorporating Afremov's signature bold and vibrant color palette. --ar 2:1 --c 50",
        },
        LibraryEntry {
            category: "Ultra Realistic Foods",
            title: "Grilled Fish and Chips",
            template: "Image of grilled fish and chips STYLE: Close-up shot | GENRE: Gourmet | EMOTION: Tempting | SCENE: A plate of freshly grilled fish and chips with seasoning and garnish | TAGS: High-end food photography, clean composition, dramatic lighting, luxurious, elegant, mouth-watering, indulgent, gourmet | CAMERA: Nikon Z7 | FOCAL LENGTH: 105mm | SHOT TYPE: Close-up | COMPOSITION: Centered | LIGHTING: Soft, directional | PRODUCTION: Food Stylist| TIME: Evening --ar 16:8",
        },
        LibraryEntry {
            category: "Ultra Realistic Foods",
            title: "Pavlova Dessert",
            template: "Image of pavlova dessert PRESENTATION: Macro Lens | CUISINE TYPE: Upscale | AMBIENCE: Alluring | VISUALS: Dessert serving of Pavlova | ATTRIBUTES: Upscale gastronomy imagery, seamless arrangement, intense yet elegant spotlight, sumptuous, refined, irresistible, lavish, gourmet | TOOL: Nikon Z7 | LENS DETAIL: 105mm | SHOT PERSPECTIVE: Close Proximity | ALIGNMENT: Equilibrium in focus | ILLUMINATION CHARACTERISTICS: Subtle, with a single point of origin | BEHIND THE SCENES: Gourmet Arrangement Specialist | PHOTO SESSION TIMING: Twilight --ar 16:8",
        },
        LibraryEntry {
            category: "Ultra Realistic Foods",
            title: "Burgers",
            template: "Image of burgers APPROACH: Detailed Focus | CATEGORY: High-end Cuisine | MOOD: Inviting | DESCRIPTION: Fresh beef burger with vibrant salads and beautiful pillow buns | KEYWORDS: Sophisticated food capture, neat framing, evocative illumination, posh, graceful, drool-inducing, decadent, gourmet | EQUIPMENT: Nikon Z7 | LENS: 105mm | SHOT NATURE: Close-range | FRAME: Balanced Central | ILLUMINATION: Gentle, from one direction | CREW: Culinary Stylist| SHOOTING SCHEDULE: Dusk --ar",
        },
    ],
});
